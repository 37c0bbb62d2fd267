//! Core functionality for the access layer
//!
//! This module contains the account model and the guarded account flows.

pub mod account_management;
pub mod models;

pub use account_management::AccountManager;
