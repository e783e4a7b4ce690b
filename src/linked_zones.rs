//! Linked zones and cross-account access requests.
//!
//! A linked zone mirrors a private zone owned by another account. Creating
//! one raises an access request on the owning zone; the link only activates
//! once the owner approves and stays revocable afterwards. Both sides of the
//! workflow live here: the link itself (requesting account) and the access
//! requests (owning account).

use serde::{Deserialize, Serialize};

use crate::client::{DnsSvcsClient, enc, require_param};
use crate::error::Result;
use crate::pagination::{ListParams, PageLink};
use crate::permitted_networks::{CreatePermittedNetworkRequest, PermittedNetwork};

/// Lifecycle state of a linked zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LinkedZoneState {
    /// Waiting for the owning account's approval.
    PendingApproval,
    /// Approved but not yet attached to any network.
    PendingNetworkAdd,
    Active,
    ApprovalRejected,
    ApprovalRevoked,
    /// The approval window lapsed before the owner acted.
    ApprovalTimedout,
    #[serde(other)]
    Unknown,
}

/// The owning zone a link points at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkedTo {
    /// CRN of the owning service instance.
    pub instance_crn: String,
    /// Id of the owning zone.
    pub zone_id: String,
}

/// A zone linked from another account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkedDnszone {
    pub id: String,
    /// Service instance holding the link.
    pub instance_id: String,
    /// Name of the owning zone, e.g. `"example.com"`.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub linked_to: LinkedTo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<LinkedZoneState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Deadline for the owner to act on the pending request.
    #[serde(default, with = "crate::utils::datetime")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_required_before: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default, with = "crate::utils::datetime")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default, with = "crate::utils::datetime")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<chrono::DateTime<chrono::Utc>>,
}

/// Body for [`DnsSvcsClient::create_linked_zone`].
#[derive(Debug, Clone, Serialize)]
pub struct CreateLinkedZoneRequest {
    /// GUID of the service instance owning the zone.
    pub owner_instance_id: String,
    /// Id of the zone to link.
    pub owner_zone_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Body for [`DnsSvcsClient::update_linked_zone`]. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateLinkedZoneRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// One page of linked zones.
#[derive(Debug, Clone, Deserialize)]
pub struct ListLinkedZonesResponse {
    pub linked_dnszones: Vec<LinkedDnszone>,
    pub offset: u32,
    pub limit: u32,
    pub total_count: u32,
    pub first: Option<PageLink>,
    pub last: Option<PageLink>,
    pub previous: Option<PageLink>,
    pub next: Option<PageLink>,
}

/// State of an access request as seen by the owning zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessRequestState {
    Pending,
    Approved,
    Rejected,
    Revoked,
    Timedout,
    #[serde(other)]
    Unknown,
}

/// Decision applied to a pending or approved access request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessRequestAction {
    Approve,
    Reject,
    /// Withdraws a previously granted approval.
    Revoke,
}

/// The account asking for access.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessRequestRequestor {
    pub account_id: String,
    /// Service instance the link lives in.
    pub instance_id: String,
    /// Id of the requesting linked zone.
    pub linked_zone_id: String,
}

/// A request by another account to link one of this instance's zones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessRequest {
    pub id: String,
    pub requestor: AccessRequestRequestor,
    /// Id of the zone access is requested for.
    pub zone_id: String,
    pub zone_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<AccessRequestState>,
    /// When a pending request times out unless acted on.
    #[serde(default, with = "crate::utils::datetime")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_expires_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default, with = "crate::utils::datetime")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default, with = "crate::utils::datetime")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone, Serialize)]
struct UpdateAccessRequestBody {
    action: AccessRequestAction,
}

/// One page of access requests.
#[derive(Debug, Clone, Deserialize)]
pub struct ListAccessRequestsResponse {
    pub access_requests: Vec<AccessRequest>,
    pub offset: u32,
    pub limit: u32,
    pub total_count: u32,
    pub first: Option<PageLink>,
    pub last: Option<PageLink>,
    pub previous: Option<PageLink>,
    pub next: Option<PageLink>,
}

impl DnsSvcsClient {
    /// Lists the linked zones of a service instance.
    pub async fn list_linked_zones(
        &self,
        instance_id: &str,
        params: &ListParams,
    ) -> Result<ListLinkedZonesResponse> {
        require_param(instance_id, "instance_id")?;
        let path = format!(
            "/instances/{}/linked_dnszones?{}",
            enc(instance_id),
            params.to_query()
        );
        self.get(&path).await
    }

    /// Creates a linked zone, raising an access request on the owning zone.
    ///
    /// The link starts in
    /// [`PendingApproval`](LinkedZoneState::PendingApproval) and only becomes
    /// usable after the owner approves.
    pub async fn create_linked_zone(
        &self,
        instance_id: &str,
        req: &CreateLinkedZoneRequest,
    ) -> Result<LinkedDnszone> {
        require_param(instance_id, "instance_id")?;
        require_param(&req.owner_instance_id, "owner_instance_id")?;
        require_param(&req.owner_zone_id, "owner_zone_id")?;
        let path = format!("/instances/{}/linked_dnszones", enc(instance_id));
        self.post(&path, req).await
    }

    /// Fetches a single linked zone.
    pub async fn get_linked_zone(
        &self,
        instance_id: &str,
        linked_dnszone_id: &str,
    ) -> Result<LinkedDnszone> {
        require_param(instance_id, "instance_id")?;
        require_param(linked_dnszone_id, "linked_dnszone_id")?;
        let path = format!(
            "/instances/{}/linked_dnszones/{}",
            enc(instance_id),
            enc(linked_dnszone_id)
        );
        self.get(&path).await
    }

    /// Updates a linked zone's description or label.
    pub async fn update_linked_zone(
        &self,
        instance_id: &str,
        linked_dnszone_id: &str,
        req: &UpdateLinkedZoneRequest,
    ) -> Result<LinkedDnszone> {
        require_param(instance_id, "instance_id")?;
        require_param(linked_dnszone_id, "linked_dnszone_id")?;
        let path = format!(
            "/instances/{}/linked_dnszones/{}",
            enc(instance_id),
            enc(linked_dnszone_id)
        );
        self.patch(&path, req).await
    }

    /// Deletes a linked zone.
    pub async fn delete_linked_zone(
        &self,
        instance_id: &str,
        linked_dnszone_id: &str,
    ) -> Result<()> {
        require_param(instance_id, "instance_id")?;
        require_param(linked_dnszone_id, "linked_dnszone_id")?;
        let path = format!(
            "/instances/{}/linked_dnszones/{}",
            enc(instance_id),
            enc(linked_dnszone_id)
        );
        self.delete(&path).await
    }

    /// Lists the access requests raised against a zone this instance owns.
    pub async fn list_access_requests(
        &self,
        instance_id: &str,
        dnszone_id: &str,
        params: &ListParams,
    ) -> Result<ListAccessRequestsResponse> {
        require_param(instance_id, "instance_id")?;
        require_param(dnszone_id, "dnszone_id")?;
        let path = format!(
            "/instances/{}/dnszones/{}/access_requests?{}",
            enc(instance_id),
            enc(dnszone_id),
            params.to_query()
        );
        self.get(&path).await
    }

    /// Fetches a single access request.
    pub async fn get_access_request(
        &self,
        instance_id: &str,
        dnszone_id: &str,
        request_id: &str,
    ) -> Result<AccessRequest> {
        require_param(instance_id, "instance_id")?;
        require_param(dnszone_id, "dnszone_id")?;
        require_param(request_id, "request_id")?;
        let path = format!(
            "/instances/{}/dnszones/{}/access_requests/{}",
            enc(instance_id),
            enc(dnszone_id),
            enc(request_id)
        );
        self.get(&path).await
    }

    /// Approves, rejects, or revokes an access request.
    pub async fn update_access_request(
        &self,
        instance_id: &str,
        dnszone_id: &str,
        request_id: &str,
        action: AccessRequestAction,
    ) -> Result<AccessRequest> {
        require_param(instance_id, "instance_id")?;
        require_param(dnszone_id, "dnszone_id")?;
        require_param(request_id, "request_id")?;
        let path = format!(
            "/instances/{}/dnszones/{}/access_requests/{}",
            enc(instance_id),
            enc(dnszone_id),
            enc(request_id)
        );
        self.patch(&path, &UpdateAccessRequestBody { action }).await
    }

    /// Lists the permitted networks of a linked zone.
    pub async fn list_linked_zone_permitted_networks(
        &self,
        instance_id: &str,
        linked_dnszone_id: &str,
    ) -> Result<crate::permitted_networks::ListPermittedNetworksResponse> {
        require_param(instance_id, "instance_id")?;
        require_param(linked_dnszone_id, "linked_dnszone_id")?;
        let path = format!(
            "/instances/{}/linked_dnszones/{}/permitted_networks",
            enc(instance_id),
            enc(linked_dnszone_id)
        );
        self.get(&path).await
    }

    /// Attaches a VPC to a linked zone.
    pub async fn create_linked_zone_permitted_network(
        &self,
        instance_id: &str,
        linked_dnszone_id: &str,
        req: &CreatePermittedNetworkRequest,
    ) -> Result<PermittedNetwork> {
        require_param(instance_id, "instance_id")?;
        require_param(linked_dnszone_id, "linked_dnszone_id")?;
        require_param(&req.permitted_network.vpc_crn, "vpc_crn")?;
        let path = format!(
            "/instances/{}/linked_dnszones/{}/permitted_networks",
            enc(instance_id),
            enc(linked_dnszone_id)
        );
        self.post(&path, req).await
    }

    /// Fetches a single permitted network of a linked zone.
    pub async fn get_linked_zone_permitted_network(
        &self,
        instance_id: &str,
        linked_dnszone_id: &str,
        permitted_network_id: &str,
    ) -> Result<PermittedNetwork> {
        require_param(instance_id, "instance_id")?;
        require_param(linked_dnszone_id, "linked_dnszone_id")?;
        require_param(permitted_network_id, "permitted_network_id")?;
        let path = format!(
            "/instances/{}/linked_dnszones/{}/permitted_networks/{}",
            enc(instance_id),
            enc(linked_dnszone_id),
            enc(permitted_network_id)
        );
        self.get(&path).await
    }

    /// Detaches a VPC from a linked zone. Completion is asynchronous, as with
    /// [`delete_permitted_network`](DnsSvcsClient::delete_permitted_network).
    pub async fn delete_linked_zone_permitted_network(
        &self,
        instance_id: &str,
        linked_dnszone_id: &str,
        permitted_network_id: &str,
    ) -> Result<PermittedNetwork> {
        require_param(instance_id, "instance_id")?;
        require_param(linked_dnszone_id, "linked_dnszone_id")?;
        require_param(permitted_network_id, "permitted_network_id")?;
        let path = format!(
            "/instances/{}/linked_dnszones/{}/permitted_networks/{}",
            enc(instance_id),
            enc(linked_dnszone_id),
            enc(permitted_network_id)
        );
        self.delete_returning(&path).await
    }
}
