//! Role registry

use crate::utils::error::AccessError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account role
///
/// The set is closed. Variants are listed from highest to lowest privilege.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Administers accounts; at least one must always exist
    Keeper,
    /// Writes content
    Editor,
    /// Reads content
    Reader,
}

impl Role {
    /// Every role, highest privilege first
    pub const ALL: [Role; 3] = [Role::Keeper, Role::Editor, Role::Reader];

    /// Position in the privilege order; higher means more privileged
    pub fn rank(self) -> u8 {
        match self {
            Role::Keeper => 2,
            Role::Editor => 1,
            Role::Reader => 0,
        }
    }

    /// Canonical name
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Keeper => "keeper",
            Role::Editor => "editor",
            Role::Reader => "reader",
        }
    }

    /// Whether `raw` names a role exactly
    pub fn is_valid(raw: &str) -> bool {
        raw.parse::<Role>().is_ok()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AccessError;

    // No trimming or case folding: "Keeper" and " keeper" are unknown roles.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keeper" => Ok(Role::Keeper),
            "editor" => Ok(Role::Editor),
            "reader" => Ok(Role::Reader),
            _ => Err(AccessError::unknown_role(s)),
        }
    }
}
