//! Storage layer for account records
//!
//! The access layer only talks to persistence through [`AccountStore`]. The
//! in-memory backend is the reference implementation.

/// In-memory account store
pub mod memory;

pub use memory::MemoryAccountStore;

use crate::auth::rbac::Role;
use crate::core::models::{Account, AccountFilter, AccountId, ProfileUpdate};
use crate::utils::error::StoreResult;
use async_trait::async_trait;

/// Record-store capability consumed by the guard and the account manager
///
/// Every operation is fallible; callers pass errors through unchanged and
/// never retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Count accounts matching a filter
    async fn count_accounts(&self, filter: &AccountFilter) -> StoreResult<u64>;

    /// Read one account
    async fn read_account(&self, id: AccountId) -> StoreResult<Account>;

    /// Persist a new role for an account
    async fn write_account_role(&self, id: AccountId, role: Role) -> StoreResult<()>;

    /// Remove an account
    async fn delete_account(&self, id: AccountId) -> StoreResult<()>;

    /// Persist self-service profile fields, returning the stored account
    async fn update_account_profile(
        &self,
        id: AccountId,
        update: &ProfileUpdate,
    ) -> StoreResult<Account>;

    /// Read every account
    async fn list_accounts(&self) -> StoreResult<Vec<Account>>;
}
