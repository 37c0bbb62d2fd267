//! In-memory account store

use super::AccountStore;
use crate::auth::rbac::Role;
use crate::core::models::{Account, AccountFilter, AccountId, ProfileUpdate};
use crate::utils::error::{StoreError, StoreResult};
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use tracing::debug;

/// DashMap-backed account store
///
/// Each call is atomic on its own; nothing spans calls, so a count followed by
/// a write is not isolated from concurrent writers.
#[derive(Debug, Default)]
pub struct MemoryAccountStore {
    accounts: DashMap<AccountId, Account>,
}

impl MemoryAccountStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with accounts
    pub fn with_accounts<I>(accounts: I) -> StoreResult<Self>
    where
        I: IntoIterator<Item = Account>,
    {
        let store = Self::new();
        for account in accounts {
            store.insert(account)?;
        }
        Ok(store)
    }

    /// Register a new account
    pub fn insert(&self, account: Account) -> StoreResult<()> {
        use dashmap::mapref::entry::Entry;

        match self.accounts.entry(account.id) {
            Entry::Occupied(_) => Err(StoreError::conflict(format!(
                "account {} already exists",
                account.id
            ))),
            Entry::Vacant(slot) => {
                debug!("Registered account {} as {}", account.id, account.role);
                slot.insert(account);
                Ok(())
            }
        }
    }

    /// Number of stored accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn count_accounts(&self, filter: &AccountFilter) -> StoreResult<u64> {
        let count = self
            .accounts
            .iter()
            .filter(|entry| filter.matches(entry.value()))
            .count();
        Ok(count as u64)
    }

    async fn read_account(&self, id: AccountId) -> StoreResult<Account> {
        self.accounts
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(StoreError::NotFound(id))
    }

    async fn write_account_role(&self, id: AccountId, role: Role) -> StoreResult<()> {
        let mut entry = self.accounts.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        entry.role = role;
        entry.updated_at = Utc::now();
        Ok(())
    }

    async fn delete_account(&self, id: AccountId) -> StoreResult<()> {
        self.accounts
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    async fn update_account_profile(
        &self,
        id: AccountId,
        update: &ProfileUpdate,
    ) -> StoreResult<Account> {
        let mut entry = self.accounts.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        entry.apply(update);
        Ok(entry.value().clone())
    }

    async fn list_accounts(&self) -> StoreResult<Vec<Account>> {
        let mut accounts: Vec<Account> = self
            .accounts
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        accounts.sort_by_key(|account| account.created_at);
        Ok(accounts)
    }
}
