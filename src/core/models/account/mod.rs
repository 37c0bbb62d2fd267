//! Account models
//!
//! This module defines account-related data structures.

pub mod types;
