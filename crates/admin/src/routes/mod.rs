//! HTTP route handlers for the admin API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (DB probe)
//!
//! # Auth
//! POST /auth/register          - Create an account (no role conferred)
//! POST /auth/login             - Issue a bearer token
//! POST /auth/logout            - Revoke the presented bearer token
//!
//! # Admin role service (bearer auth, caller must be admin)
//! GET  /api/admins             - List admin role grants
//! POST /api/admins             - Grant/revoke: {action: "add", email} |
//!                                {action: "remove", userId}
//!
//! # Content (bearer auth, caller must be admin)
//! GET  /api/settings           - Read the settings singleton
//! PUT  /api/settings           - Replace the settings singleton
//! GET  /api/locations          - List locations
//! POST /api/locations          - Create location
//! PUT  /api/locations/{id}     - Update location
//! DELETE /api/locations/{id}   - Delete location
//! GET  /api/categories         - List categories
//! POST /api/categories         - Create category
//! PUT  /api/categories/{id}    - Update category
//! DELETE /api/categories/{id}  - Delete category
//! GET  /api/menu-items         - List menu items (?category=<id>)
//! POST /api/menu-items         - Create menu item
//! PUT  /api/menu-items/{id}    - Update menu item
//! DELETE /api/menu-items/{id}  - Delete menu item
//! POST /api/images             - Upload an image (multipart)
//! ```

pub mod admins;
pub mod auth;
pub mod categories;
pub mod images;
pub mod locations;
pub mod menu_items;
pub mod settings;

use axum::Router;

use crate::state::AppState;

/// Build the admin API router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(admins::router())
        .merge(settings::router())
        .merge(locations::router())
        .merge(categories::router())
        .merge(menu_items::router())
        .merge(images::router())
}
