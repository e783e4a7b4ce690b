//! Health check monitors.
//!
//! A monitor describes how pool origins are probed: the protocol and cadence,
//! plus (for HTTP and HTTPS) the request to send and the response that counts
//! as healthy.

use serde::{Deserialize, Serialize};

use crate::client::{DnsSvcsClient, enc, require_param};
use crate::error::Result;
use crate::pagination::{ListParams, PageLink};

/// Probe protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MonitorType {
    Http,
    Https,
    Tcp,
}

/// An HTTP header sent with HTTP(S) probes. The API models the value as a
/// list to allow repeated headers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthcheckHeader {
    pub name: String,
    pub value: Vec<String>,
}

/// A health check monitor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Monitor {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub monitor_type: MonitorType,
    /// Port probed; defaults to 80/443 per protocol when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// Seconds between probes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
    /// Immediate re-probes after a failure before marking unhealthy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retries: Option<u32>,
    /// Probe timeout in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    /// HTTP(S) only: request method (`"GET"` or `"HEAD"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// HTTP(S) only: request path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// HTTP(S) only: extra request headers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<HealthcheckHeader>>,
    /// HTTPS only: skip certificate validation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_insecure: Option<bool>,
    /// HTTP(S) only: status codes counted healthy, e.g. `"2xx"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_codes: Option<String>,
    /// HTTP(S) only: substring the body must contain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_body: Option<String>,
    #[serde(default, with = "crate::utils::datetime")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default, with = "crate::utils::datetime")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<chrono::DateTime<chrono::Utc>>,
}

/// Body for [`DnsSvcsClient::create_monitor`] and [`DnsSvcsClient::update_monitor`].
#[derive(Debug, Clone, Serialize)]
pub struct MonitorRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub monitor_type: MonitorType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retries: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<HealthcheckHeader>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_insecure: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_codes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_body: Option<String>,
}

impl MonitorRequest {
    /// A TCP monitor with the API's cadence defaults.
    pub fn tcp(name: impl Into<String>, port: u16) -> Self {
        Self {
            name: name.into(),
            monitor_type: MonitorType::Tcp,
            description: None,
            port: Some(port),
            interval: None,
            retries: None,
            timeout: None,
            method: None,
            path: None,
            headers: None,
            allow_insecure: None,
            expected_codes: None,
            expected_body: None,
        }
    }
}

/// One page of monitors.
#[derive(Debug, Clone, Deserialize)]
pub struct ListMonitorsResponse {
    pub monitors: Vec<Monitor>,
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
    /// Lists the monitors of a service instance.
    pub async fn list_monitors(
        &self,
        instance_id: &str,
        params: &ListParams,
    ) -> Result<ListMonitorsResponse> {
        require_param(instance_id, "instance_id")?;
        let path = format!(
            "/instances/{}/monitors?{}",
            enc(instance_id),
            params.to_query()
        );
        self.get(&path).await
    }

    /// Creates a monitor.
    pub async fn create_monitor(
        &self,
        instance_id: &str,
        req: &MonitorRequest,
    ) -> Result<Monitor> {
        require_param(instance_id, "instance_id")?;
        require_param(&req.name, "name")?;
        let path = format!("/instances/{}/monitors", enc(instance_id));
        self.post(&path, req).await
    }

    /// Fetches a single monitor.
    pub async fn get_monitor(&self, instance_id: &str, monitor_id: &str) -> Result<Monitor> {
        require_param(instance_id, "instance_id")?;
        require_param(monitor_id, "monitor_id")?;
        let path = format!(
            "/instances/{}/monitors/{}",
            enc(instance_id),
            enc(monitor_id)
        );
        self.get(&path).await
    }

    /// Replaces a monitor's configuration.
    pub async fn update_monitor(
        &self,
        instance_id: &str,
        monitor_id: &str,
        req: &MonitorRequest,
    ) -> Result<Monitor> {
        require_param(instance_id, "instance_id")?;
        require_param(monitor_id, "monitor_id")?;
        require_param(&req.name, "name")?;
        let path = format!(
            "/instances/{}/monitors/{}",
            enc(instance_id),
            enc(monitor_id)
        );
        self.put(&path, req).await
    }

    /// Deletes a monitor. Fails with [`Conflict`](crate::DnsSvcsError::Conflict)
    /// while a pool still references it.
    pub async fn delete_monitor(&self, instance_id: &str, monitor_id: &str) -> Result<()> {
        require_param(instance_id, "instance_id")?;
        require_param(monitor_id, "monitor_id")?;
        let path = format!(
            "/instances/{}/monitors/{}",
            enc(instance_id),
            enc(monitor_id)
        );
        self.delete(&path).await
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
    async fn empty_monitor_id_fails_locally() {
        let c = client();
        let err = c.get_monitor("inst-1", "  ").await.unwrap_err();
        assert!(matches!(
            err,
            DnsSvcsError::MissingParameter { param } if param == "monitor_id"
        ));
    }

    #[test]
    fn monitor_type_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&MonitorType::Https).unwrap(),
            "\"HTTPS\""
        );
        let t: MonitorType = serde_json::from_str("\"TCP\"").unwrap();
        assert_eq!(t, MonitorType::Tcp);
    }

    #[test]
    fn https_monitor_deserializes() {
        let json = r#"{
            "id": "7dd6841c-264e-11ea-88df-062967242a6a",
            "name": "healthcheck-monitor",
            "type": "HTTPS",
            "port": 8080,
            "interval": 60,
            "retries": 2,
            "timeout": 5,
            "method": "GET",
            "path": "/health",
            "headers": [{"name": "Host", "value": ["origin.example.com"]}],
            "allow_insecure": false,
            "expected_codes": "200",
            "expected_body": "alive"
        }"#;
        let m: Monitor = serde_json::from_str(json).unwrap();
        assert_eq!(m.monitor_type, MonitorType::Https);
        assert_eq!(m.headers.as_ref().unwrap()[0].value, vec!["origin.example.com"]);
        assert_eq!(m.expected_body.as_deref(), Some("alive"));
    }

    #[test]
    fn tcp_request_omits_http_fields() {
        let req = MonitorRequest::tcp("tcp-check", 5432);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["type"], "TCP");
        assert_eq!(json["port"], 5432);
        assert!(json.get("path").is_none());
        assert!(json.get("expected_codes").is_none());
    }
}
