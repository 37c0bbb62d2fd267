//! Configuration management for the access layer
//!
//! This module handles loading, validation, and management of all configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{AccessError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Environment variable overriding the account claim name
pub const ENV_ACCOUNT_CLAIM: &str = "YAP_ACCOUNT_CLAIM";
/// Environment variable overriding the role claim name
pub const ENV_ROLE_CLAIM: &str = "YAP_ROLE_CLAIM";
/// Environment variable toggling decision auditing
pub const ENV_AUDIT_DECISIONS: &str = "YAP_AUDIT_DECISIONS";
/// Environment variable overriding the log level
pub const ENV_LOG_LEVEL: &str = "YAP_LOG_LEVEL";
/// Environment variable overriding the log format
pub const ENV_LOG_FORMAT: &str = "YAP_LOG_FORMAT";

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Access-control configuration
    #[serde(default)]
    pub access: AccessConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AccessError::config(format!("Failed to read config file: {}", e)))?;

        Self::from_yaml_str(&content)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(content)?;
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    ///
    /// A `.env` file in the working directory is read first if present.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        if let Ok(path) = dotenvy::dotenv() {
            debug!("Loaded environment from {:?}", path);
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from defaults plus whatever `lookup` returns
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(claim) = lookup(ENV_ACCOUNT_CLAIM) {
            config.access.claims.account_claim = claim;
        }
        if let Some(claim) = lookup(ENV_ROLE_CLAIM) {
            config.access.claims.role_claim = claim;
        }
        if let Some(raw) = lookup(ENV_AUDIT_DECISIONS) {
            config.access.rbac.audit_decisions = parse_bool(ENV_AUDIT_DECISIONS, &raw)?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            config.logging.level = level;
        }
        if let Some(raw) = lookup(ENV_LOG_FORMAT) {
            config.logging.format = raw
                .parse()
                .map_err(|e| AccessError::config(format!("{}: {}", ENV_LOG_FORMAT, e)))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Get access configuration
    pub fn access(&self) -> &AccessConfig {
        &self.access
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.access
            .validate()
            .map_err(|e| AccessError::config(format!("Access config error: {}", e)))?;

        self.logging
            .validate()
            .map_err(|e| AccessError::config(format!("Logging config error: {}", e)))?;

        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(AccessError::config(format!(
            "{}: expected a boolean, got '{}'",
            key, raw
        ))),
    }
}
