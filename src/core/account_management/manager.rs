//! Account management system - main facade

use crate::auth::{AccessControl, AuthorizationContext, Operation, Role};
use crate::config::AccessConfig;
use crate::core::models::{Account, AccountId, ProfileUpdate};
use crate::storage::AccountStore;
use crate::utils::error::{AccessError, Result};
use std::sync::Arc;
use tracing::{debug, info};

/// Account management system
#[derive(Clone)]
pub struct AccountManager {
    access: AccessControl,
    store: Arc<dyn AccountStore>,
}

impl std::fmt::Debug for AccountManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountManager")
            .field("access", &self.access)
            .finish_non_exhaustive()
    }
}

impl AccountManager {
    /// Create a manager from configuration, sharing one store between the
    /// guard and the writes
    pub fn new(config: &AccessConfig, store: Arc<dyn AccountStore>) -> Self {
        Self {
            access: AccessControl::new(config, Arc::clone(&store)),
            store,
        }
    }

    /// Get the access-control system
    pub fn access(&self) -> &AccessControl {
        &self.access
    }

    /// Parse an account id taken from request input
    pub fn parse_account_id(raw: &str) -> Result<AccountId> {
        AccountId::parse(raw).map_err(AccessError::bad_request)
    }

    /// Get account by ID
    pub async fn get_account(&self, id: AccountId) -> Result<Account> {
        Ok(self.store.read_account(id).await?)
    }

    /// List all accounts
    pub async fn list_accounts(&self) -> Result<Vec<Account>> {
        Ok(self.store.list_accounts().await?)
    }

    /// Update the requester's own profile
    pub async fn update_profile(
        &self,
        context: &AuthorizationContext,
        update: &ProfileUpdate,
    ) -> Result<Account> {
        let own = self.store.read_account(context.account_id).await?;
        self.access
            .engine()
            .require(context, Operation::UpdateProfile, Some(own.id))?;

        let account = self.store.update_account_profile(own.id, update).await?;
        info!("Updated profile of {}", account.id);
        Ok(account)
    }

    /// Reassign the role of `target_id`
    ///
    /// Fails with `Forbidden` before the role text is even looked at, and with
    /// `UnknownRole` before any store access.
    pub async fn assign_role(
        &self,
        context: &AuthorizationContext,
        target_id: AccountId,
        requested: &str,
    ) -> Result<Account> {
        self.access
            .engine()
            .require(context, Operation::AssignRole, Some(target_id))?;

        let role: Role = requested.parse()?;

        let mut target = self.store.read_account(target_id).await?;
        self.access
            .guard_role_change(&target, role)
            .await?
            .into_result()?;

        self.store.write_account_role(target_id, role).await?;
        info!(
            "{} reassigned {} from {} to {}",
            context.account_id, target_id, target.role, role
        );

        target.role = role;
        Ok(target)
    }

    /// Delete `target_id`, either as self-service or as a keeper
    pub async fn delete_account(
        &self,
        context: &AuthorizationContext,
        target_id: AccountId,
    ) -> Result<()> {
        self.access
            .engine()
            .require(context, Operation::DeleteAccount, Some(target_id))?;

        let target = self.store.read_account(target_id).await?;
        self.access.guard_deletion(&target).await?.into_result()?;

        self.store.delete_account(target_id).await?;
        if context.account_id == target_id {
            info!("{} deleted own {} account", target_id, target.role);
        } else {
            info!(
                "{} deleted {} account {}",
                context.account_id, target.role, target_id
            );
        }
        debug!("Account {} removed", target_id);
        Ok(())
    }
}
