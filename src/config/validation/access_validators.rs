//! Access-control configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;

impl Validate for AccessConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating access configuration");

        self.claims.validate()?;
        self.rbac.validate()?;

        Ok(())
    }
}

impl Validate for ClaimsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.account_claim.trim().is_empty() {
            return Err("Account claim name cannot be empty".to_string());
        }

        if self.role_claim.trim().is_empty() {
            return Err("Role claim name cannot be empty".to_string());
        }

        if self.account_claim == self.role_claim {
            return Err(format!(
                "Account and role claims must differ (both are '{}')",
                self.role_claim
            ));
        }

        Ok(())
    }
}

impl Validate for RbacConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
