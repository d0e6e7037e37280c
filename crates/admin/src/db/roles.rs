//! `PostgreSQL`-backed role store.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use zaatar_core::{AccountId, Email, Role, RoleGrant, RoleGrantId};

use crate::services::roles::{CollaboratorError, RoleStore};

use super::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct RoleGrantRow {
    id: Uuid,
    account_id: Uuid,
    email: String,
    role: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<RoleGrantRow> for RoleGrant {
    type Error = RepositoryError;

    fn try_from(row: RoleGrantRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;
        let role = Role::from_str(&row.role).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid role in database: {e}"))
        })?;

        Ok(Self {
            id: RoleGrantId::new(row.id),
            account_id: AccountId::new(row.account_id),
            email,
            role,
            created_at: row.created_at,
        })
    }
}

/// Role store running on the server's elevated connection pool.
///
/// This pool is the only credential that can touch `auth.user_role`; the
/// service layer is responsible for authorizing callers before calling in.
#[derive(Clone)]
pub struct PgRoleStore {
    pool: PgPool,
}

impl PgRoleStore {
    /// Create a role store over the given pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl From<RepositoryError> for CollaboratorError {
    fn from(e: RepositoryError) -> Self {
        Self(e.to_string())
    }
}

impl From<sqlx::Error> for CollaboratorError {
    fn from(e: sqlx::Error) -> Self {
        Self(format!("database error: {e}"))
    }
}

#[async_trait]
impl RoleStore for PgRoleStore {
    async fn has_role(&self, account: AccountId, role: Role) -> Result<bool, CollaboratorError> {
        let found: Option<Uuid> = sqlx::query_scalar(
            r"
            SELECT id FROM auth.user_role
            WHERE account_id = $1 AND role = $2
            ",
        )
        .bind(account.as_uuid())
        .bind(role.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(found.is_some())
    }

    async fn grant(&self, account: AccountId, role: Role) -> Result<(), CollaboratorError> {
        // Keyed on the (account_id, role) uniqueness constraint so repeated
        // grants are no-ops.
        sqlx::query(
            r"
            INSERT INTO auth.user_role (account_id, role)
            VALUES ($1, $2)
            ON CONFLICT (account_id, role) DO NOTHING
            ",
        )
        .bind(account.as_uuid())
        .bind(role.as_str())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn revoke(&self, account: AccountId, role: Role) -> Result<(), CollaboratorError> {
        // Absence is not an error.
        sqlx::query(
            r"
            DELETE FROM auth.user_role
            WHERE account_id = $1 AND role = $2
            ",
        )
        .bind(account.as_uuid())
        .bind(role.as_str())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list(&self, role: Role) -> Result<Vec<RoleGrant>, CollaboratorError> {
        let rows = sqlx::query_as::<_, RoleGrantRow>(
            r"
            SELECT user_role.id, user_role.account_id, account.email,
                   user_role.role, user_role.created_at
            FROM auth.user_role
            INNER JOIN auth.account ON account.id = user_role.account_id
            WHERE user_role.role = $1
            ORDER BY user_role.created_at ASC
            ",
        )
        .bind(role.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| RoleGrant::try_from(row).map_err(CollaboratorError::from))
            .collect()
    }
}
