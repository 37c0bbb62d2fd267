//! Guard outcome types

use crate::auth::rbac::Verdict;
use crate::utils::error::{AccessError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a guarded operation may not proceed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VetoReason {
    /// Demoting the last keeper
    SoleKeeper,
    /// Deleting the last keeper
    SoleKeeperRemaining,
}

impl VetoReason {
    pub fn message(self) -> &'static str {
        match self {
            VetoReason::SoleKeeper => "sole keeper",
            VetoReason::SoleKeeperRemaining => "sole keeper remaining",
        }
    }
}

impl fmt::Display for VetoReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of a guard check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome", content = "reason")]
pub enum GuardOutcome {
    /// The caller may perform the write
    Proceed,
    /// The caller must not perform the write
    Veto(VetoReason),
}

impl GuardOutcome {
    pub fn verdict(self) -> Verdict {
        match self {
            GuardOutcome::Proceed => Verdict::Allow,
            GuardOutcome::Veto(_) => Verdict::Deny,
        }
    }

    pub fn reason(self) -> Option<VetoReason> {
        match self {
            GuardOutcome::Proceed => None,
            GuardOutcome::Veto(reason) => Some(reason),
        }
    }

    pub fn is_vetoed(self) -> bool {
        matches!(self, GuardOutcome::Veto(_))
    }

    /// Turn a veto into [`AccessError::SoleKeeperVeto`]
    pub fn into_result(self) -> Result<()> {
        match self {
            GuardOutcome::Proceed => Ok(()),
            GuardOutcome::Veto(reason) => Err(AccessError::SoleKeeperVeto(reason)),
        }
    }
}
