//! Load balancer pools.
//!
//! Pools are instance-level resources grouping origin servers; load balancers
//! reference them by id, and a monitor (see [`crate::monitors`]) can be
//! attached for health checking.

use serde::{Deserialize, Serialize};

use crate::client::{DnsSvcsClient, enc, require_param};
use crate::error::Result;
use crate::pagination::{ListParams, PageLink};

/// An origin server as reported by the API, including health observations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Origin {
    pub name: String,
    /// IPv4 address of the origin.
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Last observed health of this origin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<bool>,
    /// Reason attached to the last failed health check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_failure_reason: Option<String>,
}

/// An origin server as submitted on create/update.
#[derive(Debug, Clone, Serialize)]
pub struct OriginInput {
    pub name: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// A pool of origin servers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pool {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Minimum healthy origins for the pool itself to count as healthy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub healthy_origins_threshold: Option<u32>,
    pub origins: Vec<Origin>,
    /// Attached monitor id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor: Option<String>,
    /// Webhook notified on pool health changes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_channel: Option<String>,
    /// Aggregate health (`"HEALTHY"`, `"DEGRADED"`, `"CRITICAL"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<String>,
    /// Region health checks are probed from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub healthcheck_region: Option<String>,
    /// Subnet CRNs health checks are probed from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub healthcheck_subnets: Option<Vec<String>>,
    #[serde(default, with = "crate::utils::datetime")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default, with = "crate::utils::datetime")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<chrono::DateTime<chrono::Utc>>,
}

/// Body for [`DnsSvcsClient::create_pool`] and [`DnsSvcsClient::update_pool`].
#[derive(Debug, Clone, Serialize)]
pub struct PoolRequest {
    pub name: String,
    pub origins: Vec<OriginInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub healthy_origins_threshold: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub healthcheck_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub healthcheck_subnets: Option<Vec<String>>,
}

/// One page of pools.
#[derive(Debug, Clone, Deserialize)]
pub struct ListPoolsResponse {
    pub pools: Vec<Pool>,
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
    /// Lists the pools of a service instance.
    pub async fn list_pools(
        &self,
        instance_id: &str,
        params: &ListParams,
    ) -> Result<ListPoolsResponse> {
        require_param(instance_id, "instance_id")?;
        let path = format!("/instances/{}/pools?{}", enc(instance_id), params.to_query());
        self.get(&path).await
    }

    /// Creates a pool.
    pub async fn create_pool(&self, instance_id: &str, req: &PoolRequest) -> Result<Pool> {
        require_param(instance_id, "instance_id")?;
        require_param(&req.name, "name")?;
        let path = format!("/instances/{}/pools", enc(instance_id));
        self.post(&path, req).await
    }

    /// Fetches a single pool.
    pub async fn get_pool(&self, instance_id: &str, pool_id: &str) -> Result<Pool> {
        require_param(instance_id, "instance_id")?;
        require_param(pool_id, "pool_id")?;
        let path = format!("/instances/{}/pools/{}", enc(instance_id), enc(pool_id));
        self.get(&path).await
    }

    /// Replaces a pool's configuration.
    pub async fn update_pool(
        &self,
        instance_id: &str,
        pool_id: &str,
        req: &PoolRequest,
    ) -> Result<Pool> {
        require_param(instance_id, "instance_id")?;
        require_param(pool_id, "pool_id")?;
        require_param(&req.name, "name")?;
        let path = format!("/instances/{}/pools/{}", enc(instance_id), enc(pool_id));
        self.put(&path, req).await
    }

    /// Deletes a pool. Fails with [`Conflict`](crate::DnsSvcsError::Conflict)
    /// while a load balancer still references it.
    pub async fn delete_pool(&self, instance_id: &str, pool_id: &str) -> Result<()> {
        require_param(instance_id, "instance_id")?;
        require_param(pool_id, "pool_id")?;
        let path = format!("/instances/{}/pools/{}", enc(instance_id), enc(pool_id));
        self.delete(&path).await
    }
}
