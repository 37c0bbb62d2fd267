//! # yap-access
//!
//! Role-based access control for the yap content backend, with a guard that
//! keeps at least one keeper account in the system.
//!
//! ## Features
//!
//! - **Closed role set**: `keeper`, `editor` and `reader`, parsed strictly
//! - **Stateless decisions**: an immutable permission table shared across requests
//! - **Self-service**: account holders may update or delete their own account
//! - **Keeper invariant**: role changes and deletions that would remove the
//!   last keeper are vetoed even when authorized
//! - **Pluggable storage**: the guard and account flows only see [`AccountStore`]
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use yap_access::{Account, AccountManager, AccessError, Config, MemoryAccountStore, Role};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let keeper = Account::new("Kim", "kim@example.com", Role::Keeper);
//!     let store = Arc::new(MemoryAccountStore::with_accounts(vec![keeper.clone()])?);
//!     let manager = AccountManager::new(Config::default().access(), store);
//!
//!     let mut claims = serde_json::Map::new();
//!     claims.insert("user".into(), keeper.id.to_string().into());
//!     claims.insert("role".into(), "keeper".into());
//!     let context = manager.access().context_from_claims(&claims)?;
//!
//!     // The only keeper may not step down
//!     let err = manager.assign_role(&context, keeper.id, "editor").await.unwrap_err();
//!     assert!(matches!(err, AccessError::SoleKeeperVeto(_)));
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod core;
pub mod storage;
pub mod utils;

// Re-export main types
pub use auth::{
    AccessControl, AuthorizationContext, Claims, ClaimsAdapter, GuardOutcome, KeeperGuard,
    Operation, PermissionTable, RbacEngine, Role, Verdict, VetoReason,
};
pub use config::Config;
pub use core::AccountManager;
pub use core::models::{Account, AccountFilter, AccountId, ProfileUpdate};
pub use storage::{AccountStore, MemoryAccountStore};
pub use utils::error::{AccessError, Result, StoreError, StoreResult};
pub use utils::logging::{SecurityLogger, init_logging};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
