//! Global load balancers.
//!
//! A load balancer answers queries for a name inside a zone with origins
//! drawn from healthy pools; pools and monitors are instance-level resources
//! (see [`crate::pools`] and [`crate::monitors`]) referenced by id.

use serde::{Deserialize, Serialize};

use crate::client::{DnsSvcsClient, enc, require_param};
use crate::error::Result;
use crate::pagination::{ListParams, PageLink};

/// Pools pinned to a specific availability zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AzPools {
    /// Availability zone, e.g. `"us-south-1"`.
    pub availability_zone: String,
    /// Pool ids serving that zone.
    pub pools: Vec<String>,
}

/// A global load balancer within a zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadBalancer {
    pub id: String,
    /// Hostname the balancer answers for, relative to the zone.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// TTL of the answers served.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    /// Aggregate health (`"HEALTHY"`, `"DEGRADED"`, `"CRITICAL"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<String>,
    /// Pool used when every default pool is unhealthy.
    pub fallback_pool: String,
    /// Ordered pool ids tried for every query.
    pub default_pools: Vec<String>,
    /// Per-availability-zone pool overrides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub az_pools: Option<Vec<AzPools>>,
    #[serde(default, with = "crate::utils::datetime")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default, with = "crate::utils::datetime")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<chrono::DateTime<chrono::Utc>>,
}

/// Body for [`DnsSvcsClient::create_load_balancer`].
#[derive(Debug, Clone, Serialize)]
pub struct CreateLoadBalancerRequest {
    pub name: String,
    pub fallback_pool: String,
    pub default_pools: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub az_pools: Option<Vec<AzPools>>,
}

/// Body for [`DnsSvcsClient::update_load_balancer`]. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateLoadBalancerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_pool: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_pools: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub az_pools: Option<Vec<AzPools>>,
}

/// One page of load balancers.
#[derive(Debug, Clone, Deserialize)]
pub struct ListLoadBalancersResponse {
    pub load_balancers: Vec<LoadBalancer>,
    pub offset: u32,
    pub limit: u32,
    pub total_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<PageLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<PageLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<PageLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<PageLink>,
}

impl DnsSvcsClient {
    /// Lists the load balancers of a zone.
    pub async fn list_load_balancers(
        &self,
        instance_id: &str,
        dnszone_id: &str,
        params: &ListParams,
    ) -> Result<ListLoadBalancersResponse> {
        require_param(instance_id, "instance_id")?;
        require_param(dnszone_id, "dnszone_id")?;
        let path = format!(
            "/instances/{}/dnszones/{}/load_balancers?{}",
            enc(instance_id),
            enc(dnszone_id),
            params.to_query()
        );
        self.get(&path).await
    }

    /// Creates a load balancer.
    pub async fn create_load_balancer(
        &self,
        instance_id: &str,
        dnszone_id: &str,
        req: &CreateLoadBalancerRequest,
    ) -> Result<LoadBalancer> {
        require_param(instance_id, "instance_id")?;
        require_param(dnszone_id, "dnszone_id")?;
        require_param(&req.name, "name")?;
        require_param(&req.fallback_pool, "fallback_pool")?;
        let path = format!(
            "/instances/{}/dnszones/{}/load_balancers",
            enc(instance_id),
            enc(dnszone_id)
        );
        self.post(&path, req).await
    }

    /// Fetches a single load balancer.
    pub async fn get_load_balancer(
        &self,
        instance_id: &str,
        dnszone_id: &str,
        lb_id: &str,
    ) -> Result<LoadBalancer> {
        require_param(instance_id, "instance_id")?;
        require_param(dnszone_id, "dnszone_id")?;
        require_param(lb_id, "lb_id")?;
        let path = format!(
            "/instances/{}/dnszones/{}/load_balancers/{}",
            enc(instance_id),
            enc(dnszone_id),
            enc(lb_id)
        );
        self.get(&path).await
    }

    /// Updates a load balancer.
    pub async fn update_load_balancer(
        &self,
        instance_id: &str,
        dnszone_id: &str,
        lb_id: &str,
        req: &UpdateLoadBalancerRequest,
    ) -> Result<LoadBalancer> {
        require_param(instance_id, "instance_id")?;
        require_param(dnszone_id, "dnszone_id")?;
        require_param(lb_id, "lb_id")?;
        let path = format!(
            "/instances/{}/dnszones/{}/load_balancers/{}",
            enc(instance_id),
            enc(dnszone_id),
            enc(lb_id)
        );
        self.put(&path, req).await
    }

    /// Deletes a load balancer.
    pub async fn delete_load_balancer(
        &self,
        instance_id: &str,
        dnszone_id: &str,
        lb_id: &str,
    ) -> Result<()> {
        require_param(instance_id, "instance_id")?;
        require_param(dnszone_id, "dnszone_id")?;
        require_param(lb_id, "lb_id")?;
        let path = format!(
            "/instances/{}/dnszones/{}/load_balancers/{}",
            enc(instance_id),
            enc(dnszone_id),
            enc(lb_id)
        );
        self.delete(&path).await
    }
}
