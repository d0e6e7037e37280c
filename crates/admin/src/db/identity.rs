//! `PostgreSQL`-backed identity resolver.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::Account;
use crate::services::auth::token_digest;
use crate::services::roles::{CollaboratorError, IdentityResolver};

use super::accounts::AccountRepository;
use super::tokens::TokenRepository;

/// Identity resolver backed by the account and token tables.
///
/// Email resolution is a direct indexed lookup by exact match. (The system
/// this replaces listed every user and scanned linearly; the observable
/// contract - exact match or not-found - is unchanged.)
#[derive(Clone)]
pub struct PgIdentityResolver {
    pool: PgPool,
}

impl PgIdentityResolver {
    /// Create an identity resolver over the given pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdentityResolver for PgIdentityResolver {
    async fn authenticate(&self, bearer: &str) -> Result<Option<Account>, CollaboratorError> {
        let tokens = TokenRepository::new(&self.pool);
        Ok(tokens.resolve(&token_digest(bearer)).await?)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, CollaboratorError> {
        let accounts = AccountRepository::new(&self.pool);
        Ok(accounts.get_by_email(email).await?)
    }
}
