//! Logging utilities
//!
//! Subscriber installation plus the structured security audit events emitted
//! by the decision engine and the keeper guard.

mod security_logger;

pub use security_logger::{SECURITY_TARGET, SecurityLogger};

use crate::config::{LogFormat, LoggingConfig};
use crate::utils::error::{AccessError, Result};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured level when set. Fails if a
/// global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.level.to_ascii_lowercase()))
        .map_err(|e| AccessError::config(format!("Invalid log filter: {}", e)))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };

    installed.map_err(|e| AccessError::config(format!("Failed to install logger: {}", e)))
}
