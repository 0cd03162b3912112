//! Tenant path and resource kinds
//!
//! Ownership chain: Organization -> Branch -> Center -> POC -> Member.
//! A tenant path is the (organization, branch) pair a row hangs off of; the
//! resource layer computes it by walking the chain upward, e.g. a POC's path
//! is `(poc.center.branch.organization_id, poc.center.branch_id)`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Chain of ownership ids a row belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantPath {
    pub organization_id: Uuid,
    pub branch_id: Option<Uuid>,
}

impl TenantPath {
    /// Path of an organization-level row (no branch in the chain)
    pub fn organization(organization_id: Uuid) -> Self {
        Self { organization_id, branch_id: None }
    }

    /// Path of a row owned by a branch
    pub fn branch(organization_id: Uuid, branch_id: Uuid) -> Self {
        Self { organization_id, branch_id: Some(branch_id) }
    }
}

/// Resource kinds the policy table covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Organization,
    Branch,
    Center,
    Poc,
    User,
}
