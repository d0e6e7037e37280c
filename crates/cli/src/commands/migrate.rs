//! Database migration command.
//!
//! Runs the migrations embedded in the admin crate (see
//! `crates/admin/migrations/`). Neither server binary migrates on startup;
//! this command is the only migration path.

use super::CliError;

/// Run all pending database migrations.
///
/// # Errors
///
/// Returns `CliError` if the environment is missing, the connection fails,
/// or a migration fails.
pub async fn run() -> Result<(), CliError> {
    let pool = super::connect().await?;

    tracing::info!("Running migrations...");
    zaatar_admin::MIGRATOR.run(&pool).await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
