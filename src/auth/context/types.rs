//! Authorization context types

use crate::auth::rbac::Role;
use crate::core::models::AccountId;
use serde::{Deserialize, Serialize};

/// Claim set handed over by the authentication collaborator
///
/// Signature and expiry checks have already happened upstream.
pub type Claims = serde_json::Map<String, serde_json::Value>;

/// Requester identity and role for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationContext {
    /// Requesting account
    pub account_id: AccountId,
    /// Role carried by the token
    pub role: Role,
}

impl AuthorizationContext {
    pub fn new(account_id: AccountId, role: Role) -> Self {
        Self { account_id, role }
    }
}
