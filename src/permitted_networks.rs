//! Permitted networks.
//!
//! A private zone only answers queries from VPCs that have been added to it
//! as permitted networks. Removal is asynchronous: the API answers 202 and
//! the network lingers in `REMOVAL_IN_PROGRESS` until teardown completes.

use serde::{Deserialize, Serialize};

use crate::client::{DnsSvcsClient, enc, require_param};
use crate::error::Result;

/// State of a permitted network attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PermittedNetworkState {
    /// The VPC can resolve the zone.
    Active,
    /// Detachment requested, teardown still running.
    RemovalInProgress,
    /// A state this client version does not know about.
    #[serde(other)]
    Unknown,
}

/// The VPC reference inside a permitted network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermittedNetworkVpc {
    /// CRN of the VPC.
    pub vpc_crn: String,
}

/// A VPC allowed to resolve a private zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermittedNetwork {
    pub id: String,
    /// Always `"vpc"` today; kept as data for forward compatibility.
    #[serde(rename = "type")]
    pub network_type: String,
    pub permitted_network: PermittedNetworkVpc,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<PermittedNetworkState>,
    /// Set when the network was attached through a linked zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_zone_id: Option<String>,
    #[serde(default, with = "crate::utils::datetime")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default, with = "crate::utils::datetime")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<chrono::DateTime<chrono::Utc>>,
}

/// Body for [`DnsSvcsClient::create_permitted_network`].
#[derive(Debug, Clone, Serialize)]
pub struct CreatePermittedNetworkRequest {
    /// Network type; only `"vpc"` is accepted today.
    #[serde(rename = "type")]
    pub network_type: String,
    pub permitted_network: PermittedNetworkVpc,
}

impl CreatePermittedNetworkRequest {
    /// Request attaching the given VPC.
    pub fn vpc(vpc_crn: impl Into<String>) -> Self {
        Self {
            network_type: "vpc".to_string(),
            permitted_network: PermittedNetworkVpc {
                vpc_crn: vpc_crn.into(),
            },
        }
    }
}

/// Response of the permitted network list (unpaginated).
#[derive(Debug, Clone, Deserialize)]
pub struct ListPermittedNetworksResponse {
    pub permitted_networks: Vec<PermittedNetwork>,
}

impl DnsSvcsClient {
    /// Lists the permitted networks of a zone.
    pub async fn list_permitted_networks(
        &self,
        instance_id: &str,
        dnszone_id: &str,
    ) -> Result<ListPermittedNetworksResponse> {
        require_param(instance_id, "instance_id")?;
        require_param(dnszone_id, "dnszone_id")?;
        let path = format!(
            "/instances/{}/dnszones/{}/permitted_networks",
            enc(instance_id),
            enc(dnszone_id)
        );
        self.get(&path).await
    }

    /// Attaches a VPC to a zone.
    pub async fn create_permitted_network(
        &self,
        instance_id: &str,
        dnszone_id: &str,
        req: &CreatePermittedNetworkRequest,
    ) -> Result<PermittedNetwork> {
        require_param(instance_id, "instance_id")?;
        require_param(dnszone_id, "dnszone_id")?;
        require_param(&req.permitted_network.vpc_crn, "vpc_crn")?;
        let path = format!(
            "/instances/{}/dnszones/{}/permitted_networks",
            enc(instance_id),
            enc(dnszone_id)
        );
        self.post(&path, req).await
    }

    /// Fetches a single permitted network.
    pub async fn get_permitted_network(
        &self,
        instance_id: &str,
        dnszone_id: &str,
        permitted_network_id: &str,
    ) -> Result<PermittedNetwork> {
        require_param(instance_id, "instance_id")?;
        require_param(dnszone_id, "dnszone_id")?;
        require_param(permitted_network_id, "permitted_network_id")?;
        let path = format!(
            "/instances/{}/dnszones/{}/permitted_networks/{}",
            enc(instance_id),
            enc(dnszone_id),
            enc(permitted_network_id)
        );
        self.get(&path).await
    }

    /// Detaches a VPC from a zone.
    ///
    /// Returns the network in state
    /// [`RemovalInProgress`](PermittedNetworkState::RemovalInProgress); the
    /// API completes the detachment asynchronously.
    pub async fn delete_permitted_network(
        &self,
        instance_id: &str,
        dnszone_id: &str,
        permitted_network_id: &str,
    ) -> Result<PermittedNetwork> {
        require_param(instance_id, "instance_id")?;
        require_param(dnszone_id, "dnszone_id")?;
        require_param(permitted_network_id, "permitted_network_id")?;
        let path = format!(
            "/instances/{}/dnszones/{}/permitted_networks/{}",
            enc(instance_id),
            enc(dnszone_id),
            enc(permitted_network_id)
        );
        self.delete_returning(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DnsSvcsError;

    fn client() -> DnsSvcsClient {
        let auth = std::sync::Arc::new(
            crate::auth::BearerTokenAuthenticator::new("test-token").unwrap(),
        );
        DnsSvcsClient::new(auth)
    }

    #[tokio::test]
    async fn empty_network_id_fails_locally() {
        let c = client();
        let err = c
            .get_permitted_network("inst-1", "zone-1", "")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DnsSvcsError::MissingParameter { param } if param == "permitted_network_id"
        ));
    }

    #[tokio::test]
    async fn create_requires_vpc_crn() {
        let c = client();
        let err = c
            .create_permitted_network(
                "inst-1",
                "zone-1",
                &CreatePermittedNetworkRequest::vpc(""),
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DnsSvcsError::MissingParameter { param } if param == "vpc_crn"
        ));
    }

    #[test]
    fn vpc_request_wire_shape() {
        let req = CreatePermittedNetworkRequest::vpc(
            "crn:v1:bluemix:public:is:us-east:a/1aaa::vpc:4aaa",
        );
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(
            json,
            r#"{"type":"vpc","permitted_network":{"vpc_crn":"crn:v1:bluemix:public:is:us-east:a/1aaa::vpc:4aaa"}}"#
        );
    }

    #[test]
    fn removal_state_deserializes() {
        let json = r#"{
            "id": "fecd0173-3919-456b-b202-3029dfa1b0f7",
            "type": "vpc",
            "permitted_network": {"vpc_crn": "crn:v1:bluemix:public:is:us-east:a/1aaa::vpc:4aaa"},
            "state": "REMOVAL_IN_PROGRESS"
        }"#;
        let net: PermittedNetwork = serde_json::from_str(json).unwrap();
        assert_eq!(net.state, Some(PermittedNetworkState::RemovalInProgress));
        assert_eq!(net.network_type, "vpc");
    }
}
