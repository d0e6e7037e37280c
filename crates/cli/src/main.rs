//! Za'atar Kitchen CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! zt-cli migrate
//!
//! # Seed sample content for local development
//! zt-cli seed
//!
//! # Grant the admin role (bootstrap path for the first admin)
//! zt-cli admin grant -e admin@example.com
//!
//! # Revoke the admin role
//! zt-cli admin revoke -e former@example.com
//!
//! # List current admins
//! zt-cli admin list
//! ```
//!
//! The HTTP role endpoint requires an existing admin caller, so the very
//! first grant has to happen here, against the database directly.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "zt-cli")]
#[command(author, version, about = "Za'atar Kitchen CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Seed sample content for local development
    Seed,
    /// Manage admin role grants
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Grant the admin role to an existing account
    Grant {
        /// Account email address
        #[arg(short, long)]
        email: String,
    },
    /// Revoke the admin role from an account
    Revoke {
        /// Account email address
        #[arg(short, long)]
        email: String,
    },
    /// List current admin role grants
    List,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed => commands::seed::run().await?,
        Commands::Admin { action } => match action {
            AdminAction::Grant { email } => commands::admin::grant(&email).await?,
            AdminAction::Revoke { email } => commands::admin::revoke(&email).await?,
            AdminAction::List => commands::admin::list().await?,
        },
    }
    Ok(())
}
