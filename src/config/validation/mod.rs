//! Configuration validation
//!
//! This module provides validation logic for all configuration structures.
//!
//! - `trait_def`: Core Validate trait definition
//! - `access_validators`: Claim-name and RBAC validators
//! - `logging_validators`: Logging validators
//! - `tests`: Test suite for all validators

mod access_validators;
mod logging_validators;
mod trait_def;

pub use trait_def::Validate;
