//! # dns-svcs
//!
//! An async client for the IBM Cloud DNS Services REST API: private DNS
//! zones, resource records, global load balancers, custom resolvers, and
//! cross-account zone linking.
//!
//! ## Resource Families
//!
//! | Family | Scope | Operations |
//! |--------|-------|------------|
//! | [Zones](DnsSvcsClient::list_dnszones) | instance | CRUD |
//! | [Resource records](DnsSvcsClient::list_resource_records) | zone | CRUD + import/export |
//! | [Permitted networks](DnsSvcsClient::list_permitted_networks) | zone | list/add/get/remove |
//! | [Load balancers](DnsSvcsClient::list_load_balancers) | zone | CRUD |
//! | [Pools](DnsSvcsClient::list_pools) / [Monitors](DnsSvcsClient::list_monitors) | instance | CRUD |
//! | [Custom resolvers](DnsSvcsClient::list_custom_resolvers) | instance | CRUD + locations + secondary zones |
//! | [Forwarding rules](DnsSvcsClient::list_forwarding_rules) | resolver | CRUD |
//! | [Linked zones](DnsSvcsClient::list_linked_zones) | instance | CRUD + access requests |
//!
//! ## Feature Flags
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! dns-svcs = "0.1"
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use dns_svcs::{BearerTokenAuthenticator, DnsSvcsClient, ListParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Build a client from an IAM bearer token
//!     let auth = Arc::new(BearerTokenAuthenticator::new("your-token")?);
//!     let client = DnsSvcsClient::new(auth);
//!
//!     // 2. List the zones of a service instance
//!     let instance_id = "1407a753-a93f-4bb0-9784-bcfc269ee1b3";
//!     let zones = client
//!         .list_dnszones(instance_id, &ListParams::default())
//!         .await?;
//!     for zone in &zones.dnszones {
//!         println!("{} ({:?})", zone.name, zone.state);
//!     }
//!
//!     // 3. List the records of the first zone
//!     let records = client
//!         .list_resource_records(instance_id, &zones.dnszones[0].id, &Default::default())
//!         .await?;
//!     for record in &records.resource_records {
//!         println!(
//!             "{} {} -> {}",
//!             record.name,
//!             record.rdata.record_type(),
//!             record.rdata.display_value()
//!         );
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Creating Records
//!
//! ```rust,no_run
//! # use dns_svcs::*;
//! # async fn example(client: DnsSvcsClient) -> Result<()> {
//! let request = CreateResourceRecordRequest {
//!     name: "www".to_string(),
//!     rdata: RecordRdata::A { ip: "10.10.16.8".to_string() },
//!     ttl: Some(300),
//!     service: None,
//!     protocol: None,
//! };
//! let record = client
//!     .create_resource_record("instance-id", "zone-id", &request)
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, DnsSvcsError>`](DnsSvcsError). The error
//! enum provides structured variants for common failure modes:
//!
//! - [`DnsSvcsError::MissingParameter`] — a required argument was empty;
//!   no request was sent
//! - [`DnsSvcsError::InvalidCredentials`] — authentication failed
//! - [`DnsSvcsError::NotFound`] — the addressed resource does not exist
//! - [`DnsSvcsError::RateLimited`] — API rate limit exceeded (retryable)
//! - [`DnsSvcsError::NetworkError`] — network connectivity issue (retryable)
//!
//! Transient errors (`NetworkError`, `Timeout`, `RateLimited`) are
//! automatically retried with exponential backoff. See [`DnsSvcsError`] for
//! the full list.

mod auth;
mod client;
mod custom_resolvers;
mod error;
mod forwarding_rules;
mod http;
mod linked_zones;
mod load_balancers;
mod monitors;
mod pagination;
mod permitted_networks;
mod pools;
mod records;
mod utils;
mod zones;

// Re-export error types
pub use error::{DnsSvcsError, Result};

// Re-export the client and its configuration
pub use client::{Config, DnsSvcsClient, DEFAULT_BASE_URL};

// Re-export the authenticator seam
pub use auth::{AuthError, Authenticator, BearerTokenAuthenticator};

// Re-export pagination types
pub use pagination::{ListParams, PageLink, DEFAULT_LIMIT, MAX_LIMIT};

// Re-export resource models
pub use custom_resolvers::{
    CreateCustomResolverRequest, CreateSecondaryZoneRequest, CustomResolver,
    ListCustomResolversResponse, ListSecondaryZonesResponse, LocationInput, ResolverHealth,
    ResolverLocation, SecondaryZone, UpdateCustomResolverRequest, UpdateLocationRequest,
    UpdateSecondaryZoneRequest,
};
pub use forwarding_rules::{
    CreateForwardingRuleRequest, ForwardingRule, ForwardingRuleType, ListForwardingRulesResponse,
    UpdateForwardingRuleRequest,
};
pub use linked_zones::{
    AccessRequest, AccessRequestAction, AccessRequestRequestor, AccessRequestState,
    CreateLinkedZoneRequest, LinkedDnszone, LinkedTo, LinkedZoneState, ListAccessRequestsResponse,
    ListLinkedZonesResponse, UpdateLinkedZoneRequest,
};
pub use load_balancers::{
    AzPools, CreateLoadBalancerRequest, ListLoadBalancersResponse, LoadBalancer,
    UpdateLoadBalancerRequest,
};
pub use monitors::{
    HealthcheckHeader, ListMonitorsResponse, Monitor, MonitorRequest, MonitorType,
};
pub use permitted_networks::{
    CreatePermittedNetworkRequest, ListPermittedNetworksResponse, PermittedNetwork,
    PermittedNetworkState, PermittedNetworkVpc,
};
pub use pools::{ListPoolsResponse, Origin, OriginInput, Pool, PoolRequest};
pub use records::{
    CreateResourceRecordRequest, ImportMessage, ImportRecordError, ImportResourceRecordsResponse,
    ListResourceRecordsResponse, RecordRdata, ResourceRecord, UpdateResourceRecordRequest,
};
pub use zones::{
    CreateDnszoneRequest, Dnszone, ListDnszonesResponse, UpdateDnszoneRequest, ZoneState,
};

// Re-export utils module
pub use utils::datetime;
