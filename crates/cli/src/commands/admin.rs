//! Admin role management commands.
//!
//! These run directly against the database with the elevated credential.
//! The HTTP role endpoint refuses callers that are not already admins, so
//! `grant` here is how the first administrator comes to exist - and the
//! recovery path if the last one is ever revoked.

use zaatar_core::Role;

use zaatar_admin::db::{AccountRepository, PgRoleStore};
use zaatar_admin::services::RoleStore;

use super::CliError;

/// Grant the admin role to the account with this email.
///
/// Idempotent: granting an existing admin again is a no-op.
///
/// # Errors
///
/// Returns `CliError::AccountNotFound` if no account has this email.
pub async fn grant(email: &str) -> Result<(), CliError> {
    let pool = super::connect().await?;

    let account = AccountRepository::new(&pool)
        .get_by_email(email)
        .await
        .map_err(|e| CliError::Store(e.to_string()))?
        .ok_or_else(|| CliError::AccountNotFound(email.to_owned()))?;

    PgRoleStore::new(pool)
        .grant(account.id, Role::Admin)
        .await
        .map_err(|e| CliError::Store(e.to_string()))?;

    tracing::info!("Admin role granted to {} ({})", email, account.id);
    Ok(())
}

/// Revoke the admin role from the account with this email.
///
/// Idempotent: revoking a non-admin is a no-op. Unlike the HTTP endpoint
/// there is no self-revoke guard here - this is the operator's escape hatch.
///
/// # Errors
///
/// Returns `CliError::AccountNotFound` if no account has this email.
pub async fn revoke(email: &str) -> Result<(), CliError> {
    let pool = super::connect().await?;

    let account = AccountRepository::new(&pool)
        .get_by_email(email)
        .await
        .map_err(|e| CliError::Store(e.to_string()))?
        .ok_or_else(|| CliError::AccountNotFound(email.to_owned()))?;

    PgRoleStore::new(pool)
        .revoke(account.id, Role::Admin)
        .await
        .map_err(|e| CliError::Store(e.to_string()))?;

    tracing::info!("Admin role revoked from {} ({})", email, account.id);
    Ok(())
}

/// List current admin role grants.
///
/// # Errors
///
/// Returns `CliError::Store` if the query fails.
pub async fn list() -> Result<(), CliError> {
    let pool = super::connect().await?;

    let grants = PgRoleStore::new(pool)
        .list(Role::Admin)
        .await
        .map_err(|e| CliError::Store(e.to_string()))?;

    if grants.is_empty() {
        tracing::info!("No admins found. Grant one with: zt-cli admin grant -e <email>");
        return Ok(());
    }

    tracing::info!("{} admin(s):", grants.len());
    for grant in grants {
        tracing::info!(
            "  {} ({}) granted {}",
            grant.email,
            grant.account_id,
            grant.created_at.format("%Y-%m-%d")
        );
    }

    Ok(())
}
