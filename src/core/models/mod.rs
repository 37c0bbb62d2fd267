//! Core data models for the access layer

pub mod account;

// Re-export commonly used types
pub use account::types::{Account, AccountFilter, AccountId, ProfileUpdate};
