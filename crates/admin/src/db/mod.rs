//! Database operations for the admin API.
//!
//! # Tables
//!
//! - `auth.account` - user accounts (email + argon2 password hash)
//! - `auth.token` - bearer credentials, stored as SHA-256 digests
//! - `auth.user_role` - role grants, unique per (account, role)
//! - `site_settings`, `location`, `category`, `menu_item` - site content
//!
//! # Migrations
//!
//! Migrations are stored in `crates/admin/migrations/` and run via:
//! ```bash
//! cargo run -p zaatar-cli -- migrate
//! ```
//!
//! All queries use runtime-bound `sqlx::query_as` so the workspace builds
//! without a live database.

pub mod accounts;
pub mod categories;
pub mod identity;
pub mod locations;
pub mod menu_items;
pub mod roles;
pub mod settings;
pub mod tokens;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use accounts::AccountRepository;
pub use categories::CategoryRepository;
pub use identity::PgIdentityResolver;
pub use locations::LocationRepository;
pub use menu_items::MenuItemRepository;
pub use roles::PgRoleStore;
pub use settings::SettingsRepository;
pub use tokens::TokenRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
