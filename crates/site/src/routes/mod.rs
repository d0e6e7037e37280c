//! HTTP route handlers for the public site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /            - Home page (hero, featured dishes, locations)
//! GET  /menu        - Menu listing (?category=<id> filters)
//! GET  /menu/{id}   - Menu item detail
//! GET  /about       - About page ("how we cook" blocks, locations)
//! GET  /contact     - Contact page (social links, location cards)
//! ```
//!
//! Every page shares the same chrome: settings-driven theme variables, SEO
//! tags, navbar, and footer, rendered by the base template.

pub mod about;
pub mod contact;
pub mod home;
pub mod menu;

use axum::{Router, routing::get};

use zaatar_core::SiteSettings;

use crate::error::SiteError;
use crate::state::AppState;

/// Build the site router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/menu", get(menu::index))
        .route("/menu/{id}", get(menu::show))
        .route("/about", get(about::about))
        .route("/contact", get(contact::contact))
        .fallback(not_found)
}

/// Shared page chrome: the settings snapshot every template needs for the
/// head (SEO, favicon, theme variables), navbar, and footer.
#[derive(Clone)]
pub struct Chrome {
    pub settings: SiteSettings,
}

impl Chrome {
    /// Load the chrome from the cached settings snapshot.
    ///
    /// # Errors
    ///
    /// Returns `SiteError::Database` if settings cannot be loaded.
    pub async fn load(state: &AppState) -> Result<Self, SiteError> {
        Ok(Self {
            settings: state.settings().await?,
        })
    }
}

/// Fallback handler for unknown paths.
async fn not_found() -> SiteError {
    SiteError::NotFound
}
