//! Forwarding rules.
//!
//! A forwarding rule tells a custom resolver to send queries matching a zone
//! or hostname to upstream servers instead of resolving them itself. Every
//! resolver carries a built-in `default` rule that cannot be deleted.

use serde::{Deserialize, Serialize};

use crate::client::{DnsSvcsClient, enc, require_param};
use crate::error::Result;
use crate::pagination::{ListParams, PageLink};

/// What a rule matches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForwardingRuleType {
    /// Matches the zone in `match` and everything under it.
    Zone,
    /// Matches exactly the hostname in `match`.
    Hostname,
    /// The resolver's catch-all rule.
    Default,
}

/// A forwarding rule on a custom resolver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForwardingRule {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub rule_type: ForwardingRuleType,
    /// Zone or hostname matched; `"*"` on the default rule.
    #[serde(rename = "match")]
    pub match_value: String,
    /// Upstream server addresses queries are forwarded to.
    pub forward_to: Vec<String>,
    #[serde(default, with = "crate::utils::datetime")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default, with = "crate::utils::datetime")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<chrono::DateTime<chrono::Utc>>,
}

/// Body for [`DnsSvcsClient::create_forwarding_rule`].
#[derive(Debug, Clone, Serialize)]
pub struct CreateForwardingRuleRequest {
    #[serde(rename = "type")]
    pub rule_type: ForwardingRuleType,
    #[serde(rename = "match")]
    pub match_value: String,
    pub forward_to: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body for [`DnsSvcsClient::update_forwarding_rule`]. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateForwardingRuleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub match_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward_to: Option<Vec<String>>,
}

/// One page of forwarding rules.
#[derive(Debug, Clone, Deserialize)]
pub struct ListForwardingRulesResponse {
    pub forwarding_rules: Vec<ForwardingRule>,
    pub offset: u32,
    pub limit: u32,
    pub total_count: u32,
    pub first: Option<PageLink>,
    pub last: Option<PageLink>,
    pub previous: Option<PageLink>,
    pub next: Option<PageLink>,
}

impl DnsSvcsClient {
    /// Lists the forwarding rules of a custom resolver.
    pub async fn list_forwarding_rules(
        &self,
        instance_id: &str,
        resolver_id: &str,
        params: &ListParams,
    ) -> Result<ListForwardingRulesResponse> {
        require_param(instance_id, "instance_id")?;
        require_param(resolver_id, "resolver_id")?;
        let path = format!(
            "/instances/{}/custom_resolvers/{}/forwarding_rules?{}",
            enc(instance_id),
            enc(resolver_id),
            params.to_query()
        );
        self.get(&path).await
    }

    /// Creates a forwarding rule.
    pub async fn create_forwarding_rule(
        &self,
        instance_id: &str,
        resolver_id: &str,
        req: &CreateForwardingRuleRequest,
    ) -> Result<ForwardingRule> {
        require_param(instance_id, "instance_id")?;
        require_param(resolver_id, "resolver_id")?;
        require_param(&req.match_value, "match")?;
        let path = format!(
            "/instances/{}/custom_resolvers/{}/forwarding_rules",
            enc(instance_id),
            enc(resolver_id)
        );
        self.post(&path, req).await
    }

    /// Fetches a single forwarding rule.
    pub async fn get_forwarding_rule(
        &self,
        instance_id: &str,
        resolver_id: &str,
        rule_id: &str,
    ) -> Result<ForwardingRule> {
        require_param(instance_id, "instance_id")?;
        require_param(resolver_id, "resolver_id")?;
        require_param(rule_id, "rule_id")?;
        let path = format!(
            "/instances/{}/custom_resolvers/{}/forwarding_rules/{}",
            enc(instance_id),
            enc(resolver_id),
            enc(rule_id)
        );
        self.get(&path).await
    }

    /// Updates a forwarding rule.
    pub async fn update_forwarding_rule(
        &self,
        instance_id: &str,
        resolver_id: &str,
        rule_id: &str,
        req: &UpdateForwardingRuleRequest,
    ) -> Result<ForwardingRule> {
        require_param(instance_id, "instance_id")?;
        require_param(resolver_id, "resolver_id")?;
        require_param(rule_id, "rule_id")?;
        let path = format!(
            "/instances/{}/custom_resolvers/{}/forwarding_rules/{}",
            enc(instance_id),
            enc(resolver_id),
            enc(rule_id)
        );
        self.patch(&path, req).await
    }

    /// Deletes a forwarding rule. The resolver's `default` rule cannot be
    /// deleted; the API answers with an error.
    pub async fn delete_forwarding_rule(
        &self,
        instance_id: &str,
        resolver_id: &str,
        rule_id: &str,
    ) -> Result<()> {
        require_param(instance_id, "instance_id")?;
        require_param(resolver_id, "resolver_id")?;
        require_param(rule_id, "rule_id")?;
        let path = format!(
            "/instances/{}/custom_resolvers/{}/forwarding_rules/{}",
            enc(instance_id),
            enc(resolver_id),
            enc(rule_id)
        );
        self.delete(&path).await
    }
}
