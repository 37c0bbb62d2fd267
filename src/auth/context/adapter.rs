//! Claims to context adapter

use super::types::{AuthorizationContext, Claims};
use crate::auth::rbac::Role;
use crate::config::ClaimsConfig;
use crate::core::models::AccountId;
use crate::utils::error::{AccessError, Result};
use serde_json::Value;
use tracing::{debug, warn};

/// Parses verified claims into an [`AuthorizationContext`]
///
/// Malformed claims are rejected. Nothing is ever defaulted to a low-privilege
/// role.
#[derive(Debug, Clone)]
pub struct ClaimsAdapter {
    account_claim: String,
    role_claim: String,
}

impl ClaimsAdapter {
    /// Create an adapter reading the claim names from configuration
    pub fn new(config: &ClaimsConfig) -> Self {
        Self {
            account_claim: config.account_claim.clone(),
            role_claim: config.role_claim.clone(),
        }
    }

    /// Extract the requester context from a claim set
    pub fn extract(&self, claims: &Claims) -> Result<AuthorizationContext> {
        let account_id = self.account_id(claims).inspect_err(|e| {
            warn!("Rejected claims: {}", e);
        })?;
        let role = self.role(claims).inspect_err(|e| {
            warn!("Rejected claims for {}: {}", account_id, e);
        })?;

        debug!("Authorization context for {} as {}", account_id, role);
        Ok(AuthorizationContext::new(account_id, role))
    }

    /// Extract from an arbitrary JSON value, which must be an object
    pub fn extract_value(&self, claims: &Value) -> Result<AuthorizationContext> {
        match claims {
            Value::Object(map) => self.extract(map),
            _ => Err(AccessError::malformed_context("claims must be an object")),
        }
    }

    fn account_id(&self, claims: &Claims) -> Result<AccountId> {
        let raw = self.string_claim(claims, &self.account_claim)?;
        AccountId::parse(raw).map_err(|_| {
            AccessError::malformed_context(format!(
                "claim '{}' is not a valid account id",
                self.account_claim
            ))
        })
    }

    fn role(&self, claims: &Claims) -> Result<Role> {
        let raw = self.string_claim(claims, &self.role_claim)?;
        raw.parse::<Role>().map_err(|_| {
            AccessError::malformed_context(format!(
                "claim '{}' is not a recognized role",
                self.role_claim
            ))
        })
    }

    fn string_claim<'a>(&self, claims: &'a Claims, name: &str) -> Result<&'a str> {
        match claims.get(name) {
            Some(Value::String(value)) => Ok(value),
            Some(_) => Err(AccessError::malformed_context(format!(
                "claim '{}' must be a string",
                name
            ))),
            None => Err(AccessError::malformed_context(format!(
                "missing claim '{}'",
                name
            ))),
        }
    }
}
