//! Identity domain models
//!
//! The `users` table itself lives with the resource layer; the auth core only
//! consumes this projection of the columns it needs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User role within an organization
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Role {
    Owner,
    BranchAdmin,
    Staff,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "Owner",
            Role::BranchAdmin => "BranchAdmin",
            Role::Staff => "Staff",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Access level of a user account: organization-wide or single branch
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum UserLevel {
    Org,
    Branch,
}

/// Auth-relevant projection of a stored user record.
///
/// Invariant (enforced by the identity store): `level == Branch` implies
/// `branch_id` is present, `level == Org` implies it is absent.
#[derive(Debug, Clone)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub level: UserLevel,
    pub organization_id: Uuid,
    pub branch_id: Option<Uuid>,
    pub is_deleted: bool,
}
