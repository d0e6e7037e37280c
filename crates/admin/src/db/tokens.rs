//! Bearer token repository.
//!
//! Tokens are random 256-bit values issued at login. Only their SHA-256
//! digests are stored; resolving a presented token hashes it and looks the
//! digest up with the expiry check in SQL.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use zaatar_core::{AccountId, Email};

use super::RepositoryError;
use crate::models::Account;

#[derive(Debug, sqlx::FromRow)]
struct TokenAccountRow {
    id: Uuid,
    email: String,
    created_at: DateTime<Utc>,
}

/// Repository for bearer token operations.
pub struct TokenRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TokenRepository<'a> {
    /// Create a new token repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Store a token digest for an account.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(
        &self,
        account_id: AccountId,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO auth.token (account_id, token_hash, expires_at)
            VALUES ($1, $2, $3)
            ",
        )
        .bind(account_id.as_uuid())
        .bind(token_hash)
        .bind(expires_at)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Resolve a token digest to its account, if the token is still live.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn resolve(&self, token_hash: &str) -> Result<Option<Account>, RepositoryError> {
        let row = sqlx::query_as::<_, TokenAccountRow>(
            r"
            SELECT account.id, account.email, account.created_at
            FROM auth.token
            INNER JOIN auth.account ON account.id = token.account_id
            WHERE token.token_hash = $1 AND token.expires_at > NOW()
            ",
        )
        .bind(token_hash)
        .fetch_optional(self.pool)
        .await?;

        row.map(|row| {
            let email = Email::parse(&row.email).map_err(|e| {
                RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
            })?;
            Ok(Account {
                id: AccountId::new(row.id),
                email,
                created_at: row.created_at,
            })
        })
        .transpose()
    }

    /// Delete a token by digest (logout). Absence is not an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, token_hash: &str) -> Result<(), RepositoryError> {
        sqlx::query(r"DELETE FROM auth.token WHERE token_hash = $1")
            .bind(token_hash)
            .execute(self.pool)
            .await?;

        Ok(())
    }

    /// Delete all expired tokens, returning how many were removed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn purge_expired(&self) -> Result<u64, RepositoryError> {
        let result = sqlx::query(r"DELETE FROM auth.token WHERE expires_at <= NOW()")
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
