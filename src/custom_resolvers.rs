//! Custom resolvers.
//!
//! A custom resolver answers DNS queries from inside VPC subnets; each
//! attached location materializes a resolver endpoint in one subnet. The
//! resolver forwards selected names elsewhere via forwarding rules
//! ([`crate::forwarding_rules`]) and can pull whole zones from external
//! primaries as secondary zones.

use serde::{Deserialize, Serialize};

use crate::client::{DnsSvcsClient, enc, require_param};
use crate::error::Result;
use crate::pagination::{ListParams, PageLink};

/// Aggregate resolver health.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResolverHealth {
    Healthy,
    Degraded,
    Critical,
    #[serde(other)]
    Unknown,
}

/// A resolver endpoint inside one VPC subnet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverLocation {
    pub id: String,
    /// CRN of the subnet hosting the endpoint.
    pub subnet_crn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Whether the endpoint currently answers queries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub healthy: Option<bool>,
    /// IP the endpoint listens on, assigned by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_server_ip: Option<String>,
}

/// A custom resolver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomResolver {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<ResolverHealth>,
    #[serde(default)]
    pub locations: Vec<ResolverLocation>,
    #[serde(default, with = "crate::utils::datetime")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default, with = "crate::utils::datetime")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<chrono::DateTime<chrono::Utc>>,
}

/// A location as submitted when creating a resolver or adding an endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct LocationInput {
    pub subnet_crn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Body for [`DnsSvcsClient::create_custom_resolver`].
#[derive(Debug, Clone, Serialize)]
pub struct CreateCustomResolverRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Initial endpoints; more can be added later.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<LocationInput>>,
}

/// Body for [`DnsSvcsClient::update_custom_resolver`]. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCustomResolverRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Body for [`DnsSvcsClient::update_custom_resolver_location`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateLocationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_crn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Response of the custom resolver list (unpaginated).
#[derive(Debug, Clone, Deserialize)]
pub struct ListCustomResolversResponse {
    pub custom_resolvers: Vec<CustomResolver>,
}

/// A zone the resolver keeps in sync from external primaries via zone
/// transfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecondaryZone {
    pub id: String,
    /// Zone name being transferred, e.g. `"example.com"`.
    pub zone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Addresses of the primaries transfers are requested from.
    pub transfer_from: Vec<String>,
    #[serde(default, with = "crate::utils::datetime")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default, with = "crate::utils::datetime")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<chrono::DateTime<chrono::Utc>>,
}

/// Body for [`DnsSvcsClient::create_secondary_zone`].
#[derive(Debug, Clone, Serialize)]
pub struct CreateSecondaryZoneRequest {
    pub zone: String,
    pub transfer_from: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Body for [`DnsSvcsClient::update_secondary_zone`]. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateSecondaryZoneRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_from: Option<Vec<String>>,
}

/// One page of secondary zones.
#[derive(Debug, Clone, Deserialize)]
pub struct ListSecondaryZonesResponse {
    pub secondary_zones: Vec<SecondaryZone>,
    pub offset: u32,
    pub limit: u32,
    pub total_count: u32,
    pub first: Option<PageLink>,
    pub last: Option<PageLink>,
    pub previous: Option<PageLink>,
    pub next: Option<PageLink>,
}

impl DnsSvcsClient {
    /// Lists the custom resolvers of a service instance.
    pub async fn list_custom_resolvers(
        &self,
        instance_id: &str,
    ) -> Result<ListCustomResolversResponse> {
        require_param(instance_id, "instance_id")?;
        let path = format!("/instances/{}/custom_resolvers", enc(instance_id));
        self.get(&path).await
    }

    /// Creates a custom resolver.
    pub async fn create_custom_resolver(
        &self,
        instance_id: &str,
        req: &CreateCustomResolverRequest,
    ) -> Result<CustomResolver> {
        require_param(instance_id, "instance_id")?;
        require_param(&req.name, "name")?;
        let path = format!("/instances/{}/custom_resolvers", enc(instance_id));
        self.post(&path, req).await
    }

    /// Fetches a single custom resolver.
    pub async fn get_custom_resolver(
        &self,
        instance_id: &str,
        resolver_id: &str,
    ) -> Result<CustomResolver> {
        require_param(instance_id, "instance_id")?;
        require_param(resolver_id, "resolver_id")?;
        let path = format!(
            "/instances/{}/custom_resolvers/{}",
            enc(instance_id),
            enc(resolver_id)
        );
        self.get(&path).await
    }

    /// Updates a custom resolver.
    pub async fn update_custom_resolver(
        &self,
        instance_id: &str,
        resolver_id: &str,
        req: &UpdateCustomResolverRequest,
    ) -> Result<CustomResolver> {
        require_param(instance_id, "instance_id")?;
        require_param(resolver_id, "resolver_id")?;
        let path = format!(
            "/instances/{}/custom_resolvers/{}",
            enc(instance_id),
            enc(resolver_id)
        );
        self.patch(&path, req).await
    }

    /// Deletes a custom resolver and all of its locations.
    pub async fn delete_custom_resolver(
        &self,
        instance_id: &str,
        resolver_id: &str,
    ) -> Result<()> {
        require_param(instance_id, "instance_id")?;
        require_param(resolver_id, "resolver_id")?;
        let path = format!(
            "/instances/{}/custom_resolvers/{}",
            enc(instance_id),
            enc(resolver_id)
        );
        self.delete(&path).await
    }

    /// Adds a resolver endpoint in the given subnet.
    pub async fn add_custom_resolver_location(
        &self,
        instance_id: &str,
        resolver_id: &str,
        req: &LocationInput,
    ) -> Result<ResolverLocation> {
        require_param(instance_id, "instance_id")?;
        require_param(resolver_id, "resolver_id")?;
        require_param(&req.subnet_crn, "subnet_crn")?;
        let path = format!(
            "/instances/{}/custom_resolvers/{}/locations",
            enc(instance_id),
            enc(resolver_id)
        );
        self.post(&path, req).await
    }

    /// Updates a resolver endpoint.
    pub async fn update_custom_resolver_location(
        &self,
        instance_id: &str,
        resolver_id: &str,
        location_id: &str,
        req: &UpdateLocationRequest,
    ) -> Result<ResolverLocation> {
        require_param(instance_id, "instance_id")?;
        require_param(resolver_id, "resolver_id")?;
        require_param(location_id, "location_id")?;
        let path = format!(
            "/instances/{}/custom_resolvers/{}/locations/{}",
            enc(instance_id),
            enc(resolver_id),
            enc(location_id)
        );
        self.patch(&path, req).await
    }

    /// Removes a resolver endpoint.
    pub async fn delete_custom_resolver_location(
        &self,
        instance_id: &str,
        resolver_id: &str,
        location_id: &str,
    ) -> Result<()> {
        require_param(instance_id, "instance_id")?;
        require_param(resolver_id, "resolver_id")?;
        require_param(location_id, "location_id")?;
        let path = format!(
            "/instances/{}/custom_resolvers/{}/locations/{}",
            enc(instance_id),
            enc(resolver_id),
            enc(location_id)
        );
        self.delete(&path).await
    }

    /// Lists the secondary zones of a custom resolver.
    pub async fn list_secondary_zones(
        &self,
        instance_id: &str,
        resolver_id: &str,
        params: &ListParams,
    ) -> Result<ListSecondaryZonesResponse> {
        require_param(instance_id, "instance_id")?;
        require_param(resolver_id, "resolver_id")?;
        let path = format!(
            "/instances/{}/custom_resolvers/{}/secondary_zones?{}",
            enc(instance_id),
            enc(resolver_id),
            params.to_query()
        );
        self.get(&path).await
    }

    /// Creates a secondary zone on a custom resolver.
    pub async fn create_secondary_zone(
        &self,
        instance_id: &str,
        resolver_id: &str,
        req: &CreateSecondaryZoneRequest,
    ) -> Result<SecondaryZone> {
        require_param(instance_id, "instance_id")?;
        require_param(resolver_id, "resolver_id")?;
        require_param(&req.zone, "zone")?;
        let path = format!(
            "/instances/{}/custom_resolvers/{}/secondary_zones",
            enc(instance_id),
            enc(resolver_id)
        );
        self.post(&path, req).await
    }

    /// Fetches a single secondary zone.
    pub async fn get_secondary_zone(
        &self,
        instance_id: &str,
        resolver_id: &str,
        secondary_zone_id: &str,
    ) -> Result<SecondaryZone> {
        require_param(instance_id, "instance_id")?;
        require_param(resolver_id, "resolver_id")?;
        require_param(secondary_zone_id, "secondary_zone_id")?;
        let path = format!(
            "/instances/{}/custom_resolvers/{}/secondary_zones/{}",
            enc(instance_id),
            enc(resolver_id),
            enc(secondary_zone_id)
        );
        self.get(&path).await
    }

    /// Updates a secondary zone.
    pub async fn update_secondary_zone(
        &self,
        instance_id: &str,
        resolver_id: &str,
        secondary_zone_id: &str,
        req: &UpdateSecondaryZoneRequest,
    ) -> Result<SecondaryZone> {
        require_param(instance_id, "instance_id")?;
        require_param(resolver_id, "resolver_id")?;
        require_param(secondary_zone_id, "secondary_zone_id")?;
        let path = format!(
            "/instances/{}/custom_resolvers/{}/secondary_zones/{}",
            enc(instance_id),
            enc(resolver_id),
            enc(secondary_zone_id)
        );
        self.patch(&path, req).await
    }

    /// Deletes a secondary zone.
    pub async fn delete_secondary_zone(
        &self,
        instance_id: &str,
        resolver_id: &str,
        secondary_zone_id: &str,
    ) -> Result<()> {
        require_param(instance_id, "instance_id")?;
        require_param(resolver_id, "resolver_id")?;
        require_param(secondary_zone_id, "secondary_zone_id")?;
        let path = format!(
            "/instances/{}/custom_resolvers/{}/secondary_zones/{}",
            enc(instance_id),
            enc(resolver_id),
            enc(secondary_zone_id)
        );
        self.delete(&path).await
    }
}
