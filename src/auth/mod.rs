//! Authentication context and authorization system
//!
//! Request flow: claims are parsed by the [`context`] adapter, checked by the
//! [`rbac`] engine, and role changes or deletions additionally pass the
//! [`guard`], which may veto an authorized operation to keep at least one
//! keeper in the system.

pub mod context;
pub mod guard;
pub mod rbac;

pub use context::{AuthorizationContext, Claims, ClaimsAdapter};
pub use guard::{GuardOutcome, KeeperGuard, VetoReason};
pub use rbac::{Operation, PermissionTable, RbacEngine, Role, Verdict};

use crate::config::AccessConfig;
use crate::core::models::Account;
use crate::storage::AccountStore;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::info;

/// Main access-control system
///
/// Cheap to clone; every component is immutable or shares the injected store.
#[derive(Debug, Clone)]
pub struct AccessControl {
    /// Claims adapter
    adapter: ClaimsAdapter,
    /// Decision engine
    engine: RbacEngine,
    /// Keeper guard
    guard: KeeperGuard,
}

impl AccessControl {
    /// Create a new access-control system over a record store
    pub fn new(config: &AccessConfig, store: Arc<dyn AccountStore>) -> Self {
        info!("Initializing access control");

        let access = Self {
            adapter: ClaimsAdapter::new(&config.claims),
            engine: RbacEngine::new(&config.rbac),
            guard: KeeperGuard::new(store),
        };

        info!(
            "Access control initialized with {} permission grants",
            access.engine.table().len()
        );
        access
    }

    /// Parse verified claims into a requester context
    pub fn context_from_claims(&self, claims: &Claims) -> Result<AuthorizationContext> {
        self.adapter.extract(claims)
    }

    /// Authorize an operation
    pub fn authorize(
        &self,
        context: &AuthorizationContext,
        operation: Operation,
        target: Option<&Account>,
    ) -> Verdict {
        self.engine.authorize(context, operation, target)
    }

    /// Guard a role change
    pub async fn guard_role_change(&self, current: &Account, requested: Role) -> Result<GuardOutcome> {
        self.guard.guard_role_change(current, requested).await
    }

    /// Guard a deletion
    pub async fn guard_deletion(&self, target: &Account) -> Result<GuardOutcome> {
        self.guard.guard_deletion(target).await
    }

    /// Get the claims adapter
    pub fn adapter(&self) -> &ClaimsAdapter {
        &self.adapter
    }

    /// Get the decision engine
    pub fn engine(&self) -> &RbacEngine {
        &self.engine
    }

    /// Get the keeper guard
    pub fn guard(&self) -> &KeeperGuard {
        &self.guard
    }
}
