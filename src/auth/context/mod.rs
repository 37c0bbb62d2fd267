//! Authorization context
//!
//! Turns verified authentication claims into a strongly-typed requester
//! identity and role. This is the only entry point for claim data into the
//! RBAC domain.

mod adapter;
mod types;

pub use adapter::ClaimsAdapter;
pub use types::{AuthorizationContext, Claims};
