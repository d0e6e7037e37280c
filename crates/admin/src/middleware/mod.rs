//! HTTP middleware and extractors for the admin API.

pub mod auth;

pub use auth::{RequireAdmin, bearer_token};
