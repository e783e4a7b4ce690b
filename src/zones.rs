//! DNS zones.
//!
//! A zone is the root resource of the service: records, permitted networks,
//! load balancers and access requests all hang off a zone within a service
//! instance.

use serde::{Deserialize, Serialize};

use crate::client::{DnsSvcsClient, enc, require_param};
use crate::error::Result;
use crate::pagination::{ListParams, PageLink};

/// Lifecycle state of a DNS zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneState {
    /// Created but not yet resolvable: no permitted network added.
    PendingNetworkAdd,
    /// Resolvable from its permitted networks.
    Active,
    /// Administratively disabled.
    Disabled,
    /// An update is being applied.
    PendingUpdate,
    /// Deletion in progress.
    PendingDelete,
    /// A state this client version does not know about.
    #[serde(other)]
    Unknown,
}

/// A DNS zone hosted by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dnszone {
    /// Zone identifier (`{name}:{uuid}`).
    pub id: String,
    /// Service instance the zone belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    /// Zone name, e.g. `"example.com"`.
    pub name: String,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Caller-assigned label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Current lifecycle state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<ZoneState>,
    #[serde(default, with = "crate::utils::datetime")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default, with = "crate::utils::datetime")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<chrono::DateTime<chrono::Utc>>,
}

/// Body for [`DnsSvcsClient::create_dnszone`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateDnszoneRequest {
    /// Zone name. Required by the API.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Body for [`DnsSvcsClient::update_dnszone`]. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateDnszoneRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// One page of zones.
#[derive(Debug, Clone, Deserialize)]
pub struct ListDnszonesResponse {
    pub dnszones: Vec<Dnszone>,
    pub offset: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
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
    /// Lists the zones of a service instance.
    pub async fn list_dnszones(
        &self,
        instance_id: &str,
        params: &ListParams,
    ) -> Result<ListDnszonesResponse> {
        require_param(instance_id, "instance_id")?;
        let path = format!(
            "/instances/{}/dnszones?{}",
            enc(instance_id),
            params.to_query()
        );
        self.get(&path).await
    }

    /// Creates a zone.
    pub async fn create_dnszone(
        &self,
        instance_id: &str,
        req: &CreateDnszoneRequest,
    ) -> Result<Dnszone> {
        require_param(instance_id, "instance_id")?;
        require_param(&req.name, "name")?;
        let path = format!("/instances/{}/dnszones", enc(instance_id));
        self.post(&path, req).await
    }

    /// Fetches a single zone.
    pub async fn get_dnszone(&self, instance_id: &str, dnszone_id: &str) -> Result<Dnszone> {
        require_param(instance_id, "instance_id")?;
        require_param(dnszone_id, "dnszone_id")?;
        let path = format!(
            "/instances/{}/dnszones/{}",
            enc(instance_id),
            enc(dnszone_id)
        );
        self.get(&path).await
    }

    /// Updates a zone's description and/or label.
    pub async fn update_dnszone(
        &self,
        instance_id: &str,
        dnszone_id: &str,
        req: &UpdateDnszoneRequest,
    ) -> Result<Dnszone> {
        require_param(instance_id, "instance_id")?;
        require_param(dnszone_id, "dnszone_id")?;
        let path = format!(
            "/instances/{}/dnszones/{}",
            enc(instance_id),
            enc(dnszone_id)
        );
        self.patch(&path, req).await
    }

    /// Deletes a zone and everything in it.
    pub async fn delete_dnszone(&self, instance_id: &str, dnszone_id: &str) -> Result<()> {
        require_param(instance_id, "instance_id")?;
        require_param(dnszone_id, "dnszone_id")?;
        let path = format!(
            "/instances/{}/dnszones/{}",
            enc(instance_id),
            enc(dnszone_id)
        );
        self.delete(&path).await
    }
}
