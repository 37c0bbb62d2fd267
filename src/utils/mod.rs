//! Utility modules for the access layer
//!
//! - **error**: Error types and the transport-neutral error envelope
//! - **logging**: Subscriber setup and security audit events

pub mod error; // Error handling
pub mod logging; // Logging & audit

pub use error::{AccessError, Result, StoreError, StoreResult};
pub use logging::{SecurityLogger, init_logging};
