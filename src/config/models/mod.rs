//! Configuration data models
//!
//! This module defines all configuration structures used by the access layer.

#![allow(missing_docs)]

pub mod access;
pub mod logging;

// Re-export all configuration types
pub use access::*;
pub use logging::*;

/// Default claim carrying the account id
pub fn default_account_claim() -> String {
    "user".to_string()
}

/// Default claim carrying the role
pub fn default_role_claim() -> String {
    "role".to_string()
}

/// Default log level
pub fn default_log_level() -> String {
    "info".to_string()
}

pub(crate) fn default_true() -> bool {
    true
}
