//! Keeper-count guard

use super::types::{GuardOutcome, VetoReason};
use crate::auth::rbac::Role;
use crate::core::models::{Account, AccountFilter};
use crate::storage::AccountStore;
use crate::utils::error::Result;
use crate::utils::logging::SecurityLogger;
use std::sync::Arc;
use tracing::{debug, warn};

/// Vetoes role changes and deletions that would remove the last keeper
#[derive(Clone)]
pub struct KeeperGuard {
    store: Arc<dyn AccountStore>,
}

impl std::fmt::Debug for KeeperGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeeperGuard").finish_non_exhaustive()
    }
}

impl KeeperGuard {
    /// Create a guard over a record store
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    /// Check a role change of `current` to `requested`
    ///
    /// Only a keeper moving off the keeper role costs a store read.
    pub async fn guard_role_change(
        &self,
        current: &Account,
        requested: Role,
    ) -> Result<GuardOutcome> {
        if !current.is_keeper() || requested == Role::Keeper {
            debug!(
                "Role change {} -> {} for {} needs no keeper check",
                current.role, requested, current.id
            );
            return Ok(GuardOutcome::Proceed);
        }

        let keepers = self.keeper_count().await?;
        let outcome = Self::decide(keepers, VetoReason::SoleKeeper);
        self.report(current, "role_change", keepers, outcome);
        Ok(outcome)
    }

    /// Check deletion of `target`
    pub async fn guard_deletion(&self, target: &Account) -> Result<GuardOutcome> {
        if !target.is_keeper() {
            debug!("Deletion of {} ({}) needs no keeper check", target.id, target.role);
            return Ok(GuardOutcome::Proceed);
        }

        let keepers = self.keeper_count().await?;
        let outcome = Self::decide(keepers, VetoReason::SoleKeeperRemaining);
        self.report(target, "delete", keepers, outcome);
        Ok(outcome)
    }

    async fn keeper_count(&self) -> Result<u64> {
        Ok(self
            .store
            .count_accounts(&AccountFilter::role(Role::Keeper))
            .await?)
    }

    // The target itself is a keeper, so a count of one (or a stale zero)
    // means it is the last one.
    fn decide(keepers: u64, reason: VetoReason) -> GuardOutcome {
        if keepers <= 1 {
            GuardOutcome::Veto(reason)
        } else {
            GuardOutcome::Proceed
        }
    }

    fn report(&self, target: &Account, action: &str, keepers: u64, outcome: GuardOutcome) {
        if let GuardOutcome::Veto(reason) = outcome {
            warn!("Vetoed {} of {}: {}", action, target.id, reason);
        } else {
            debug!("Allowed {} of keeper {} ({} keepers)", action, target.id, keepers);
        }
        SecurityLogger::log_guard_event(target.id, action, keepers, outcome.reason());
    }
}
