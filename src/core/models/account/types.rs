//! Core account types

use crate::auth::rbac::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque account identifier
///
/// Always a non-nil UUID; the nil value is reserved for "no account" and is
/// rejected by [`AccountId::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Uuid", into = "Uuid")]
pub struct AccountId(Uuid);

impl AccountId {
    /// Generate a fresh identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier from text, rejecting the nil UUID
    pub fn parse(raw: &str) -> Result<Self, String> {
        let uuid =
            Uuid::parse_str(raw).map_err(|e| format!("invalid account id '{}': {}", raw, e))?;
        Self::try_from(uuid)
    }

    /// Underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Uuid> for AccountId {
    type Error = String;

    fn try_from(uuid: Uuid) -> Result<Self, Self::Error> {
        if uuid.is_nil() {
            return Err("account id must not be nil".to_string());
        }
        Ok(Self(uuid))
    }
}

impl From<AccountId> for Uuid {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

impl FromStr for AccountId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Account record
#[derive(Clone, Serialize, Deserialize)]
pub struct Account {
    /// Account identifier
    pub id: AccountId,
    /// Display name
    pub display_name: String,
    /// Contact address
    pub email: String,
    /// Credential hash, owned by the authentication subsystem
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Whether the account is live
    pub is_active: bool,
    /// Assigned role
    pub role: Role,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create an active account with a fresh id
    pub fn new<N: Into<String>, E: Into<String>>(display_name: N, email: E, role: Role) -> Self {
        let now = Utc::now();
        Self {
            id: AccountId::new(),
            display_name: display_name.into(),
            email: email.into(),
            password_hash: String::new(),
            is_active: true,
            role,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the credential hash
    pub fn with_password_hash<S: Into<String>>(mut self, hash: S) -> Self {
        self.password_hash = hash.into();
        self
    }

    /// Whether this account holds the keeper role
    pub fn is_keeper(&self) -> bool {
        self.role == Role::Keeper
    }

    /// Apply a self-service profile update
    pub fn apply(&mut self, update: &ProfileUpdate) {
        self.display_name = update.display_name.clone();
        self.email = update.email.clone();
        self.is_active = update.is_active;
        self.updated_at = Utc::now();
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("display_name", &self.display_name)
            .field("email", &self.email)
            .field("password_hash", &"[REDACTED]")
            .field("is_active", &self.is_active)
            .field("role", &self.role)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

/// Fields an account holder may change on their own profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    /// New display name
    pub display_name: String,
    /// New contact address
    pub email: String,
    /// New live flag
    pub is_active: bool,
}

/// Filter for account counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccountFilter {
    /// Only count accounts holding this role
    pub role: Option<Role>,
}

impl AccountFilter {
    /// Filter matching every account
    pub fn all() -> Self {
        Self::default()
    }

    /// Filter matching accounts with the given role
    pub fn role(role: Role) -> Self {
        Self { role: Some(role) }
    }

    /// Whether an account passes this filter
    pub fn matches(&self, account: &Account) -> bool {
        self.role.is_none_or(|role| account.role == role)
    }
}
