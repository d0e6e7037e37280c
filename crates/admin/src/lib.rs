//! Za'atar Kitchen Admin library.
//!
//! This crate provides the admin API as a library, allowing it to be tested
//! and reused by the CLI.
//!
//! # Security
//!
//! This crate holds the elevated database credential that can read and write
//! the role-grant relation. Ordinary callers never see that credential: they
//! authenticate with bearer tokens, and every privileged operation
//! re-validates the caller's own admin grant before touching the store.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

/// Embedded database migrations (see `migrations/`).
///
/// Run via `zt-cli migrate`; the server does not migrate on startup.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();
