//! Integration tests for yap-access
//!
//! These tests verify the interaction between the claims adapter, the
//! decision engine, the keeper guard and the store.

pub mod config_validation_tests;
pub mod error_handling_tests;
