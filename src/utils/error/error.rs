//! Error handling for the access layer
//!
//! This module defines all error types used throughout the crate.

#![allow(missing_docs)]

use crate::auth::guard::VetoReason;
use crate::core::models::AccountId;
use thiserror::Error;

/// Result type alias for the access layer
pub type Result<T> = std::result::Result<T, AccessError>;

/// Result type alias for record-store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Main error type for the access layer
#[derive(Error, Debug)]
pub enum AccessError {
    /// A role value outside the closed role set
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// Authorization denied
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The operation was authorized but would leave the system without a keeper
    #[error("Not modified: {0}")]
    SoleKeeperVeto(VetoReason),

    /// Authentication claims did not parse into an identity and a role
    #[error("Malformed authorization context: {0}")]
    MalformedContext(String),

    /// Malformed request input
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Record store errors, passed through as-is
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Errors reported by the record-store collaborator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No account with this id
    #[error("Account not found: {0}")]
    NotFound(AccountId),

    /// The write collides with existing state
    #[error("Store conflict: {0}")]
    Conflict(String),

    /// The store cannot be reached
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Any other backend failure
    #[error("Store backend error: {0}")]
    Backend(String),
}

/// Standard error response format
#[derive(Debug, serde::Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Debug, serde::Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
}

impl AccessError {
    /// Status an enclosing transport should answer with.
    ///
    /// A veto maps to 304 rather than 403 so callers can tell "never allowed"
    /// apart from "not allowed in the current state".
    pub fn status_code(&self) -> u16 {
        match self {
            AccessError::UnknownRole(_) | AccessError::BadRequest(_) => 400,
            AccessError::MalformedContext(_) => 401,
            AccessError::Forbidden(_) => 403,
            AccessError::SoleKeeperVeto(_) => 304,
            AccessError::Store(StoreError::NotFound(_)) => 404,
            AccessError::Store(StoreError::Conflict(_)) => 409,
            AccessError::Store(StoreError::Unavailable(_)) => 503,
            AccessError::Store(StoreError::Backend(_))
            | AccessError::Config(_)
            | AccessError::Io(_)
            | AccessError::Yaml(_) => 500,
        }
    }

    /// Stable machine-readable code
    pub fn error_code(&self) -> &'static str {
        match self {
            AccessError::UnknownRole(_) => "UNKNOWN_ROLE",
            AccessError::BadRequest(_) => "BAD_REQUEST",
            AccessError::MalformedContext(_) => "UNAUTHORIZED",
            AccessError::Forbidden(_) => "FORBIDDEN",
            AccessError::SoleKeeperVeto(_) => "NOT_MODIFIED",
            AccessError::Store(StoreError::NotFound(_)) => "NOT_FOUND",
            AccessError::Store(StoreError::Conflict(_)) => "CONFLICT",
            AccessError::Store(StoreError::Unavailable(_)) => "SERVICE_UNAVAILABLE",
            AccessError::Store(StoreError::Backend(_)) => "STORE_ERROR",
            AccessError::Config(_) | AccessError::Io(_) | AccessError::Yaml(_) => "CONFIG_ERROR",
        }
    }

    /// Whether this is a business-rule rejection rather than a security one
    pub fn is_veto(&self) -> bool {
        matches!(self, AccessError::SoleKeeperVeto(_))
    }

    /// Build the response envelope for this error
    pub fn to_response(&self) -> ErrorResponse {
        let message = match self {
            AccessError::Store(StoreError::NotFound(_)) => "Account not found".to_string(),
            AccessError::Store(_) => "Store operation failed".to_string(),
            AccessError::Config(_) | AccessError::Io(_) | AccessError::Yaml(_) => {
                "An internal error occurred".to_string()
            }
            AccessError::SoleKeeperVeto(reason) => reason.message().to_string(),
            _ => self.to_string(),
        };

        ErrorResponse {
            error: ErrorDetail {
                code: self.error_code().to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
            },
        }
    }
}

/// Helper functions for creating specific errors
impl AccessError {
    pub fn unknown_role<S: Into<String>>(role: S) -> Self {
        Self::UnknownRole(role.into())
    }

    pub fn forbidden<S: Into<String>>(message: S) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn malformed_context<S: Into<String>>(message: S) -> Self {
        Self::MalformedContext(message.into())
    }

    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }
}

impl StoreError {
    pub fn conflict<S: Into<String>>(message: S) -> Self {
        Self::Conflict(message.into())
    }

    pub fn unavailable<S: Into<String>>(message: S) -> Self {
        Self::Unavailable(message.into())
    }

    pub fn backend<S: Into<String>>(message: S) -> Self {
        Self::Backend(message.into())
    }
}
