//! Account management
//!
//! Caller-side sequences for the guarded account operations: authorize, read,
//! guard, then write. Writes happen only after both the engine and the guard
//! allow.

mod manager;

pub use manager::AccountManager;
