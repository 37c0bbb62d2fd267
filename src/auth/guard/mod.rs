//! Account lifecycle guard
//!
//! Sits between authorization and execution of role changes and deletions,
//! vetoing any step that would leave the system without a keeper. The guard
//! reads the keeper count once and never writes; the caller performs the write
//! only after a [`GuardOutcome::Proceed`].
//!
//! Check and write are two separate store calls. A concurrent demotion or
//! deletion landing between them is not detected here.

mod keeper;
mod types;

pub use keeper::KeeperGuard;
pub use types::{GuardOutcome, VetoReason};
