//! Resource records.
//!
//! Record data is typed per record type: the wire shape is a sibling pair
//! `"type": "MX", "rdata": {"exchange": …, "preference": …}`, modeled here as
//! an adjacently tagged enum flattened into the record structs so callers
//! never assemble loose JSON maps.

use serde::{Deserialize, Serialize};

use crate::client::{DnsSvcsClient, enc, require_param};
use crate::error::Result;
use crate::pagination::{ListParams, PageLink};

/// Typed record data, carrying the fields specific to each record type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "rdata")]
pub enum RecordRdata {
    /// IPv4 address record.
    A {
        /// IPv4 address (e.g., `"192.0.2.1"`).
        ip: String,
    },

    /// IPv6 address record.
    AAAA {
        /// IPv6 address (e.g., `"2001:db8::1"`).
        ip: String,
    },

    /// Alias from one name to another.
    CNAME {
        /// Canonical target hostname.
        cname: String,
    },

    /// Mail exchange record.
    MX {
        /// Mail server hostname.
        exchange: String,
        /// Preference (lower = preferred).
        preference: u16,
    },

    /// Reverse-lookup pointer record.
    PTR {
        /// Hostname the address points back to.
        ptrdname: String,
    },

    /// Service locator record. The owning record additionally carries the
    /// `service` and `protocol` labels.
    SRV {
        /// TCP/UDP port number.
        port: u16,
        /// Priority (lower = preferred).
        priority: u16,
        /// Target hostname providing the service.
        target: String,
        /// Weight for load balancing among same-priority targets.
        weight: u16,
    },

    /// Arbitrary text data.
    TXT {
        /// Text content.
        text: String,
    },
}

impl RecordRdata {
    /// Uppercase record type name as the API spells it.
    pub fn record_type(&self) -> &'static str {
        match self {
            Self::A { .. } => "A",
            Self::AAAA { .. } => "AAAA",
            Self::CNAME { .. } => "CNAME",
            Self::MX { .. } => "MX",
            Self::PTR { .. } => "PTR",
            Self::SRV { .. } => "SRV",
            Self::TXT { .. } => "TXT",
        }
    }

    /// Primary value for display (the address for A/AAAA, the target for
    /// CNAME/SRV/PTR, the exchange for MX, the text for TXT).
    pub fn display_value(&self) -> &str {
        match self {
            Self::A { ip } | Self::AAAA { ip } => ip,
            Self::CNAME { cname } => cname,
            Self::MX { exchange, .. } => exchange,
            Self::PTR { ptrdname } => ptrdname,
            Self::SRV { target, .. } => target,
            Self::TXT { text } => text,
        }
    }
}

/// A resource record as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceRecord {
    /// Record identifier (`{type}:{uuid}`).
    pub id: String,
    /// Fully qualified record name.
    pub name: String,
    /// Type discriminant plus typed `rdata`.
    #[serde(flatten)]
    pub rdata: RecordRdata,
    /// Time to live in seconds.
    pub ttl: u32,
    /// SRV service label (e.g., `"_sip"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    /// SRV protocol label (e.g., `"udp"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(default, with = "crate::utils::datetime")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default, with = "crate::utils::datetime")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<chrono::DateTime<chrono::Utc>>,
}

/// Body for [`DnsSvcsClient::create_resource_record`].
#[derive(Debug, Clone, Serialize)]
pub struct CreateResourceRecordRequest {
    /// Record name, relative or fully qualified.
    pub name: String,
    /// Type discriminant plus typed `rdata`.
    #[serde(flatten)]
    pub rdata: RecordRdata,
    /// Time to live in seconds. The API applies its default when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    /// SRV service label, required for SRV records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    /// SRV protocol label, required for SRV records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
}

/// Body for [`DnsSvcsClient::update_resource_record`].
///
/// The record type itself cannot change; the rdata variant must match the
/// existing record.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateResourceRecordRequest {
    pub name: String,
    #[serde(flatten)]
    pub rdata: RecordRdata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
}

/// One page of resource records.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResourceRecordsResponse {
    pub resource_records: Vec<ResourceRecord>,
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

/// Outcome of a zone-file import.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportResourceRecordsResponse {
    /// Records successfully parsed from the file.
    pub total_records_parsed: u32,
    /// Records added to the zone.
    pub records_added: u32,
    /// Records the API rejected.
    pub records_failed: u32,
    #[serde(default)]
    pub messages: Vec<ImportMessage>,
    #[serde(default)]
    pub errors: Vec<ImportRecordError>,
}

/// Informational message attached to an import result.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportMessage {
    pub code: String,
    pub message: String,
}

/// A record the import rejected, with the reason.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportRecordError {
    /// The offending line from the zone file.
    pub resource_record: String,
    pub error: ImportMessage,
}

impl DnsSvcsClient {
    /// Lists the resource records of a zone.
    pub async fn list_resource_records(
        &self,
        instance_id: &str,
        dnszone_id: &str,
        params: &ListParams,
    ) -> Result<ListResourceRecordsResponse> {
        require_param(instance_id, "instance_id")?;
        require_param(dnszone_id, "dnszone_id")?;
        let path = format!(
            "/instances/{}/dnszones/{}/resource_records?{}",
            enc(instance_id),
            enc(dnszone_id),
            params.to_query()
        );
        self.get(&path).await
    }

    /// Creates a resource record.
    pub async fn create_resource_record(
        &self,
        instance_id: &str,
        dnszone_id: &str,
        req: &CreateResourceRecordRequest,
    ) -> Result<ResourceRecord> {
        require_param(instance_id, "instance_id")?;
        require_param(dnszone_id, "dnszone_id")?;
        require_param(&req.name, "name")?;
        let path = format!(
            "/instances/{}/dnszones/{}/resource_records",
            enc(instance_id),
            enc(dnszone_id)
        );
        self.post(&path, req).await
    }

    /// Fetches a single resource record.
    pub async fn get_resource_record(
        &self,
        instance_id: &str,
        dnszone_id: &str,
        record_id: &str,
    ) -> Result<ResourceRecord> {
        require_param(instance_id, "instance_id")?;
        require_param(dnszone_id, "dnszone_id")?;
        require_param(record_id, "record_id")?;
        let path = format!(
            "/instances/{}/dnszones/{}/resource_records/{}",
            enc(instance_id),
            enc(dnszone_id),
            enc(record_id)
        );
        self.get(&path).await
    }

    /// Updates a resource record in place.
    pub async fn update_resource_record(
        &self,
        instance_id: &str,
        dnszone_id: &str,
        record_id: &str,
        req: &UpdateResourceRecordRequest,
    ) -> Result<ResourceRecord> {
        require_param(instance_id, "instance_id")?;
        require_param(dnszone_id, "dnszone_id")?;
        require_param(record_id, "record_id")?;
        require_param(&req.name, "name")?;
        let path = format!(
            "/instances/{}/dnszones/{}/resource_records/{}",
            enc(instance_id),
            enc(dnszone_id),
            enc(record_id)
        );
        self.put(&path, req).await
    }

    /// Deletes a resource record.
    pub async fn delete_resource_record(
        &self,
        instance_id: &str,
        dnszone_id: &str,
        record_id: &str,
    ) -> Result<()> {
        require_param(instance_id, "instance_id")?;
        require_param(dnszone_id, "dnszone_id")?;
        require_param(record_id, "record_id")?;
        let path = format!(
            "/instances/{}/dnszones/{}/resource_records/{}",
            enc(instance_id),
            enc(dnszone_id),
            enc(record_id)
        );
        self.delete(&path).await
    }

    /// Exports the zone's records as zone-file text.
    pub async fn export_resource_records(
        &self,
        instance_id: &str,
        dnszone_id: &str,
    ) -> Result<String> {
        require_param(instance_id, "instance_id")?;
        require_param(dnszone_id, "dnszone_id")?;
        let path = format!(
            "/instances/{}/dnszones/{}/export_resource_records",
            enc(instance_id),
            enc(dnszone_id)
        );
        self.get_text(&path).await
    }

    /// Imports records into the zone from zone-file text.
    ///
    /// Uploaded as a multipart `file` part; per-record failures are reported
    /// in the response rather than failing the call.
    pub async fn import_resource_records(
        &self,
        instance_id: &str,
        dnszone_id: &str,
        file: Vec<u8>,
        filename: &str,
    ) -> Result<ImportResourceRecordsResponse> {
        require_param(instance_id, "instance_id")?;
        require_param(dnszone_id, "dnszone_id")?;
        require_param(filename, "filename")?;
        let path = format!(
            "/instances/{}/dnszones/{}/import_resource_records",
            enc(instance_id),
            enc(dnszone_id)
        );
        self.post_file(&path, file, filename).await
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
    async fn empty_record_id_fails_locally() {
        let c = client();
        let err = c
            .get_resource_record("inst-1", "zone-1", "")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DnsSvcsError::MissingParameter { param } if param == "record_id"
        ));
    }

    #[tokio::test]
    async fn import_requires_filename() {
        let c = client();
        let err = c
            .import_resource_records("inst-1", "zone-1", vec![], "")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DnsSvcsError::MissingParameter { param } if param == "filename"
        ));
    }

    // ---- wire shape ----

    #[test]
    fn a_record_wire_shape() {
        let req = CreateResourceRecordRequest {
            name: "www".to_string(),
            rdata: RecordRdata::A {
                ip: "192.0.2.1".to_string(),
            },
            ttl: Some(3600),
            service: None,
            protocol: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["type"], "A");
        assert_eq!(json["rdata"]["ip"], "192.0.2.1");
        assert_eq!(json["ttl"], 3600);
        assert!(json.get("service").is_none());
    }

    #[test]
    fn mx_record_wire_shape() {
        let req = CreateResourceRecordRequest {
            name: "example.com".to_string(),
            rdata: RecordRdata::MX {
                exchange: "mail.example.com".to_string(),
                preference: 10,
            },
            ttl: None,
            service: None,
            protocol: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["type"], "MX");
        assert_eq!(json["rdata"]["exchange"], "mail.example.com");
        assert_eq!(json["rdata"]["preference"], 10);
        assert!(json.get("ttl").is_none());
    }

    #[test]
    fn srv_record_round_trip() {
        let json = r#"{
            "id": "SRV:5365b73c-ce6f-4d16-ad85-7f4ba1000a34",
            "name": "_sip._udp.example.com",
            "type": "SRV",
            "rdata": {"port": 5060, "priority": 10, "target": "sip.example.com", "weight": 50},
            "ttl": 3600,
            "service": "_sip",
            "protocol": "udp",
            "created_on": "2021-04-21T08:18:25Z"
        }"#;
        let rec: ResourceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.rdata.record_type(), "SRV");
        assert!(matches!(
            &rec.rdata,
            RecordRdata::SRV { port: 5060, target, .. } if target == "sip.example.com"
        ));
        assert_eq!(rec.service.as_deref(), Some("_sip"));

        let back = serde_json::to_value(&rec).unwrap();
        assert_eq!(back["type"], "SRV");
        assert_eq!(back["rdata"]["port"], 5060);
    }

    #[test]
    fn ptr_record_deserializes() {
        let json = r#"{
            "id": "PTR:abc",
            "name": "1.2.0.192.in-addr.arpa",
            "type": "PTR",
            "rdata": {"ptrdname": "www.example.com"},
            "ttl": 300
        }"#;
        let rec: ResourceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.rdata.display_value(), "www.example.com");
    }

    #[test]
    fn record_type_names() {
        assert_eq!(
            RecordRdata::TXT {
                text: "v=spf1 -all".into()
            }
            .record_type(),
            "TXT"
        );
        assert_eq!(
            RecordRdata::AAAA {
                ip: "2001:db8::1".into()
            }
            .record_type(),
            "AAAA"
        );
        assert_eq!(
            RecordRdata::CNAME {
                cname: "example.com".into()
            }
            .record_type(),
            "CNAME"
        );
    }

    #[test]
    fn import_response_deserializes() {
        let json = r#"{
            "total_records_parsed": 10,
            "records_added": 8,
            "records_failed": 2,
            "messages": [{"code": "record_added", "message": "8 records added"}],
            "errors": [{
                "resource_record": "www.example.com. 3600 IN A not-an-ip",
                "error": {"code": "invalid_rdata", "message": "rdata is not a valid IPv4 address"}
            }]
        }"#;
        let resp: ImportResourceRecordsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.records_added, 8);
        assert_eq!(resp.errors.len(), 1);
        assert_eq!(resp.errors[0].error.code, "invalid_rdata");
    }

    #[test]
    fn import_response_tolerates_missing_lists() {
        let json = r#"{"total_records_parsed": 1, "records_added": 1, "records_failed": 0}"#;
        let resp: ImportResourceRecordsResponse = serde_json::from_str(json).unwrap();
        assert!(resp.messages.is_empty());
        assert!(resp.errors.is_empty());
    }
}
