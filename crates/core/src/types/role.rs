//! Role labels and role grants.
//!
//! A [`RoleGrant`] associates one account with one role label. The store
//! enforces at most one grant per (account, role) pair, which makes granting
//! an idempotent upsert and revoking an idempotent delete.

use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::email::Email;
use super::id::{AccountId, RoleGrantId};

/// A role label conferring elevated privileges.
///
/// Only `admin` exists today; the label is stored as text so adding roles is
/// a data change, not a schema change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full access to the content-management API.
    Admin,
}

/// Error parsing a [`Role`] from its text label.
#[derive(thiserror::Error, Debug, Clone)]
#[error("unknown role: {0}")]
pub struct RoleError(pub String);

impl Role {
    /// The role's text label as stored in the database.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            other => Err(RoleError(other.to_owned())),
        }
    }
}

/// A persisted association between an account and a role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleGrant {
    /// Database ID of the grant row.
    pub id: RoleGrantId,
    /// The account holding the role.
    pub account_id: AccountId,
    /// The account's email, joined in for display.
    pub email: Email,
    /// The granted role.
    pub role: Role,
    /// When the grant was created.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_role_label_roundtrip() {
        let role: Role = Role::Admin.as_str().parse().unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn test_unknown_label_rejected() {
        assert!("superuser".parse::<Role>().is_err());
    }

    #[test]
    fn test_serde_uses_snake_case_label() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    }
}
