//! RBAC decision engine

use crate::auth::context::AuthorizationContext;
use crate::config::RbacConfig;
use crate::core::models::{Account, AccountId};
use crate::utils::error::{AccessError, Result};
use crate::utils::logging::SecurityLogger;
use std::sync::Arc;
use tracing::debug;

use super::permissions::PermissionTable;
use super::types::{Operation, Verdict};

/// Stateless authorization engine
///
/// Holds only a shared, immutable permission table. Never touches the record
/// store: targets are passed in as data.
#[derive(Debug, Clone)]
pub struct RbacEngine {
    table: Arc<PermissionTable>,
    audit_decisions: bool,
}

impl RbacEngine {
    /// Create an engine over the standard permission table
    pub fn new(config: &RbacConfig) -> Self {
        Self::with_table(PermissionTable::standard(), config)
    }

    /// Create an engine over a specific table
    pub fn with_table(table: Arc<PermissionTable>, config: &RbacConfig) -> Self {
        Self {
            table,
            audit_decisions: config.audit_decisions,
        }
    }

    /// Decide whether `context` may perform `operation` on `target`
    pub fn authorize(
        &self,
        context: &AuthorizationContext,
        operation: Operation,
        target: Option<&Account>,
    ) -> Verdict {
        self.authorize_target(context, operation, target.map(|account| account.id))
    }

    /// Decide against a target identified only by id
    ///
    /// Lets callers decide before reading the target from the store.
    pub fn authorize_target(
        &self,
        context: &AuthorizationContext,
        operation: Operation,
        target_id: Option<AccountId>,
    ) -> Verdict {
        let (verdict, reason) = if operation.is_self_directed()
            && target_id == Some(context.account_id)
        {
            (Verdict::Allow, "self-service")
        } else {
            match self.table.lookup(context.role, operation) {
                Verdict::Allow => (Verdict::Allow, "granted"),
                Verdict::Deny => (Verdict::Deny, "no grant"),
            }
        };

        debug!(
            "Authorization {} for {} ({}) on {}: {}",
            verdict, context.account_id, context.role, operation, reason
        );
        if self.audit_decisions {
            SecurityLogger::log_authz_event(
                context.account_id,
                context.role,
                operation,
                target_id,
                verdict,
                reason,
            );
        }

        verdict
    }

    /// Like [`authorize_target`](Self::authorize_target), but a denial is an error
    pub fn require(
        &self,
        context: &AuthorizationContext,
        operation: Operation,
        target_id: Option<AccountId>,
    ) -> Result<()> {
        match self.authorize_target(context, operation, target_id) {
            Verdict::Allow => Ok(()),
            Verdict::Deny => Err(AccessError::forbidden(format!(
                "role '{}' may not perform '{}'",
                context.role, operation
            ))),
        }
    }

    /// The table this engine consults
    pub fn table(&self) -> &PermissionTable {
        &self.table
    }
}
