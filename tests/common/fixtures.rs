//! Test fixtures and data factories
//!
//! Provides factory methods for creating test data with sensible defaults.

use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;
use yap_access::{
    Account, AccountFilter, AccountId, AccountManager, AccountStore, AuthorizationContext,
    Claims, Config, MemoryAccountStore, Role,
};

/// Factory for creating test accounts
pub struct AccountFactory;

impl AccountFactory {
    /// Create an account with a unique name
    pub fn create(role: Role) -> Account {
        let tag = &Uuid::new_v4().to_string()[..8];
        Account::new(
            format!("{}_{}", role, tag),
            format!("{}-{}@example.com", role, tag),
            role,
        )
        .with_password_hash("hashed_password")
    }

    /// Create a keeper
    pub fn keeper() -> Account {
        Self::create(Role::Keeper)
    }

    /// Create an editor
    pub fn editor() -> Account {
        Self::create(Role::Editor)
    }

    /// Create a reader
    pub fn reader() -> Account {
        Self::create(Role::Reader)
    }
}

/// Factory for creating verified-claims maps
pub struct ClaimsFactory;

impl ClaimsFactory {
    /// Claims under the default claim names
    pub fn for_account(account: &Account) -> Claims {
        Self::raw(&account.id.to_string(), account.role.as_str())
    }

    /// Claims with arbitrary string values
    pub fn raw(account: &str, role: &str) -> Claims {
        let mut claims = Claims::new();
        claims.insert("user".to_string(), Value::String(account.to_string()));
        claims.insert("role".to_string(), Value::String(role.to_string()));
        claims
    }
}

/// A seeded store and the manager over it
pub struct Directory {
    pub store: Arc<MemoryAccountStore>,
    pub manager: AccountManager,
}

impl Directory {
    /// Seed a store with `accounts` under the default configuration
    pub fn seed(accounts: Vec<Account>) -> Self {
        let store = Arc::new(
            MemoryAccountStore::with_accounts(accounts).expect("fixture ids are unique"),
        );
        let manager = AccountManager::new(Config::default().access(), store.clone());
        Self { store, manager }
    }

    /// Context for `account` as the claims adapter would build it
    pub fn context(&self, account: &Account) -> AuthorizationContext {
        self.manager
            .access()
            .context_from_claims(&ClaimsFactory::for_account(account))
            .expect("fixture claims are well formed")
    }

    /// Current role of `id` in the store
    pub async fn role_of(&self, id: AccountId) -> Role {
        self.store.read_account(id).await.expect("account exists").role
    }

    /// Current keeper count
    pub async fn keepers(&self) -> u64 {
        self.store
            .count_accounts(&AccountFilter::role(Role::Keeper))
            .await
            .expect("memory store never fails")
    }
}
