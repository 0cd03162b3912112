//! Decoded claim model
//!
//! The legacy controllers branched on a stringly `userType` claim on every
//! request. Here the scope is a tagged enum, so a branch-scoped claim set
//! always carries its branch id and an unknown user type cannot reach the
//! policy layer at all.

use crate::{
    error::AppError,
    models::identity::{Identity, Role, UserLevel},
};
use uuid::Uuid;

/// Tenant scope embedded in a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessScope {
    /// Organization-wide access across all branches
    Organization { organization_id: Uuid },
    /// Access restricted to a single branch
    Branch {
        organization_id: Uuid,
        branch_id: Uuid,
    },
}

impl AccessScope {
    /// Wire value of the `user_type` claim
    pub fn user_type(&self) -> &'static str {
        match self {
            AccessScope::Organization { .. } => "Organization",
            AccessScope::Branch { .. } => "Branch",
        }
    }

    pub fn organization_id(&self) -> Uuid {
        match self {
            AccessScope::Organization { organization_id }
            | AccessScope::Branch { organization_id, .. } => *organization_id,
        }
    }

    pub fn branch_id(&self) -> Option<Uuid> {
        match self {
            AccessScope::Organization { .. } => None,
            AccessScope::Branch { branch_id, .. } => Some(*branch_id),
        }
    }
}

/// Typed view of a token's claims, rebuilt on every request.
///
/// Immutable once constructed; the token is the only session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimSet {
    pub user_id: Uuid,
    pub email: String,
    pub role: Role,
    pub scope: AccessScope,
}

impl ClaimSet {
    pub fn user_type(&self) -> &'static str {
        self.scope.user_type()
    }

    pub fn organization_id(&self) -> Uuid {
        self.scope.organization_id()
    }

    pub fn branch_id(&self) -> Option<Uuid> {
        self.scope.branch_id()
    }
}

/// Build the claim set minted into a token at login.
///
/// Total for well-formed identities. A branch-level identity without a branch
/// id violates the store invariant and is reported as an internal error, not
/// an authentication failure.
pub fn derive_claims(identity: &Identity) -> Result<ClaimSet, AppError> {
    let scope = match identity.level {
        UserLevel::Org => AccessScope::Organization {
            organization_id: identity.organization_id,
        },
        UserLevel::Branch => {
            let branch_id = identity.branch_id.ok_or_else(|| {
                AppError::Internal(format!(
                    "branch-level identity {} has no branch id",
                    identity.id
                ))
            })?;
            AccessScope::Branch {
                organization_id: identity.organization_id,
                branch_id,
            }
        }
    };

    Ok(ClaimSet {
        user_id: identity.id,
        email: identity.email.clone(),
        role: identity.role,
        scope,
    })
}
