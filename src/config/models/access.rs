//! Access-control configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Access-control configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessConfig {
    /// Claim names read from verified tokens
    #[serde(default)]
    pub claims: ClaimsConfig,
    /// RBAC configuration
    #[serde(default)]
    pub rbac: RbacConfig,
}

/// Claim names used by the authorization context adapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimsConfig {
    /// Claim holding the account id
    #[serde(default = "default_account_claim")]
    pub account_claim: String,
    /// Claim holding the role
    #[serde(default = "default_role_claim")]
    pub role_claim: String,
}

impl Default for ClaimsConfig {
    fn default() -> Self {
        Self {
            account_claim: default_account_claim(),
            role_claim: default_role_claim(),
        }
    }
}

/// RBAC configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RbacConfig {
    /// Emit a security audit event for every authorization decision
    #[serde(default = "default_true")]
    pub audit_decisions: bool,
}

impl Default for RbacConfig {
    fn default() -> Self {
        Self {
            audit_decisions: true,
        }
    }
}
