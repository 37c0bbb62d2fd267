//! RBAC type definitions

use crate::utils::error::AccessError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mutating operation subject to authorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Reassign another account's role
    #[serde(rename = "accounts.assign")]
    AssignRole,
    /// Remove an account
    #[serde(rename = "accounts.delete")]
    DeleteAccount,
    /// Change profile fields of an account
    #[serde(rename = "accounts.update")]
    UpdateProfile,
}

impl Operation {
    /// Every operation the engine may be asked about
    pub const ALL: [Operation; 3] = [
        Operation::AssignRole,
        Operation::DeleteAccount,
        Operation::UpdateProfile,
    ];

    /// Stable permission name
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::AssignRole => "accounts.assign",
            Operation::DeleteAccount => "accounts.delete",
            Operation::UpdateProfile => "accounts.update",
        }
    }

    /// Whether an account may always perform this operation on itself
    pub fn is_self_directed(self) -> bool {
        matches!(self, Operation::DeleteAccount | Operation::UpdateProfile)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| AccessError::bad_request(format!("Unknown operation: {}", s)))
    }
}

/// Authorization outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Allow,
    Deny,
}

impl Verdict {
    pub fn is_allowed(self) -> bool {
        self == Verdict::Allow
    }
}

impl From<bool> for Verdict {
    fn from(granted: bool) -> Self {
        if granted { Verdict::Allow } else { Verdict::Deny }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Allow => f.write_str("allow"),
            Verdict::Deny => f.write_str("deny"),
        }
    }
}
