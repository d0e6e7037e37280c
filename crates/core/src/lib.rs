//! Za'atar Kitchen Core - Shared types library.
//!
//! This crate provides common types used across all Za'atar Kitchen components:
//! - `site` - Public restaurant website
//! - `admin` - Content-management JSON API (bearer-token auth)
//! - `cli` - Command-line tools for migrations, seeding, and admin bootstrap
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, roles, prices,
//!   and theme colors
//! - [`content`] - Domain types for the site content tables (settings,
//!   locations, categories, menu items)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod content;
pub mod types;

pub use content::*;
pub use types::*;
