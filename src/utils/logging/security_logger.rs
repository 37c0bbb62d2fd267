//! Security-aware logging utilities

use crate::auth::guard::VetoReason;
use crate::auth::rbac::{Operation, Role, Verdict};
use crate::core::models::AccountId;
use tracing::{debug, info, warn};

/// Target used for every audit event
pub const SECURITY_TARGET: &str = "security";

/// Structured audit events for authorization and guard outcomes
pub struct SecurityLogger;

impl SecurityLogger {
    /// Log an authorization decision
    pub fn log_authz_event(
        account_id: AccountId,
        role: Role,
        operation: Operation,
        target: Option<AccountId>,
        verdict: Verdict,
        reason: &str,
    ) {
        let target = target.map(|id| id.to_string()).unwrap_or_default();

        match verdict {
            Verdict::Allow => debug!(
                target: SECURITY_TARGET,
                account_id = %account_id,
                role = %role,
                operation = %operation,
                target_account = %target,
                verdict = %verdict,
                reason,
                "Authorization granted"
            ),
            Verdict::Deny => warn!(
                target: SECURITY_TARGET,
                account_id = %account_id,
                role = %role,
                operation = %operation,
                target_account = %target,
                verdict = %verdict,
                reason,
                "Authorization denied"
            ),
        }
    }

    /// Log a keeper-guard outcome
    pub fn log_guard_event(
        target: AccountId,
        action: &str,
        keeper_count: u64,
        veto: Option<VetoReason>,
    ) {
        match veto {
            Some(reason) => warn!(
                target: SECURITY_TARGET,
                target_account = %target,
                action,
                keeper_count,
                veto = %reason,
                "Keeper guard vetoed operation"
            ),
            None => info!(
                target: SECURITY_TARGET,
                target_account = %target,
                action,
                keeper_count,
                "Keeper guard allowed operation"
            ),
        }
    }
}
