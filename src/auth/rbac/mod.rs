//! Role-Based Access Control (RBAC) system
//!
//! This module provides the closed role registry, the static permission table
//! and the decision engine that consults it.

mod permissions;
mod roles;
mod system;
mod types;

// Re-export public types and structs
pub use permissions::{PermissionGrant, PermissionTable};
pub use roles::Role;
pub use system::RbacEngine;
pub use types::{Operation, Verdict};
