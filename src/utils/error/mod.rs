//! Error Handling utilities
//!
//! This module provides the crate-wide error type and the record-store error
//! that flows through it unchanged.

pub mod error;

// Re-export commonly used types
pub use error::*;
