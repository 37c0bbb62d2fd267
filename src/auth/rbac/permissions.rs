//! Static permission table

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use super::roles::Role;
use super::types::{Operation, Verdict};

/// A single (role, operation) grant
#[derive(Debug, Clone)]
pub struct PermissionGrant {
    /// Role receiving the grant
    pub role: Role,
    /// Operation granted
    pub operation: Operation,
    /// Grant description
    pub description: &'static str,
}

/// Standard grants: account administration belongs to keepers alone.
static STANDARD_GRANTS: &[PermissionGrant] = &[
    PermissionGrant {
        role: Role::Keeper,
        operation: Operation::AssignRole,
        description: "Reassign the role of any account",
    },
    PermissionGrant {
        role: Role::Keeper,
        operation: Operation::DeleteAccount,
        description: "Delete any account",
    },
];

static STANDARD_TABLE: Lazy<Arc<PermissionTable>> =
    Lazy::new(|| Arc::new(PermissionTable::from_grants(STANDARD_GRANTS.iter().cloned())));

/// Immutable map from (role, operation) to verdict
///
/// Built once and never mutated; safe to share across threads without locks.
/// Any pair without a grant is denied.
#[derive(Debug, Clone)]
pub struct PermissionTable {
    grants: HashMap<(Role, Operation), PermissionGrant>,
}

impl PermissionTable {
    /// The process-wide standard table
    pub fn standard() -> Arc<PermissionTable> {
        Arc::clone(&STANDARD_TABLE)
    }

    /// Build a table from an explicit list of grants
    pub fn from_grants<I>(grants: I) -> Self
    where
        I: IntoIterator<Item = PermissionGrant>,
    {
        let grants: HashMap<_, _> = grants
            .into_iter()
            .map(|grant| ((grant.role, grant.operation), grant))
            .collect();

        debug!("Built permission table with {} grants", grants.len());
        Self { grants }
    }

    /// Look up the verdict for a pair
    pub fn lookup(&self, role: Role, operation: Operation) -> Verdict {
        Verdict::from(self.grants.contains_key(&(role, operation)))
    }

    /// The grant behind an `Allow`, if any
    pub fn grant(&self, role: Role, operation: Operation) -> Option<&PermissionGrant> {
        self.grants.get(&(role, operation))
    }

    /// Operations granted to a role
    pub fn operations_for(&self, role: Role) -> Vec<Operation> {
        Operation::ALL
            .into_iter()
            .filter(|op| self.grants.contains_key(&(role, *op)))
            .collect()
    }

    /// Number of explicit grants
    pub fn len(&self) -> usize {
        self.grants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }
}
