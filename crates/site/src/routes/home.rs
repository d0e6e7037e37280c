//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use zaatar_core::{Location, MenuItem};

use crate::db::{LocationReader, MenuReader};
use crate::error::SiteError;
use crate::filters;
use crate::state::AppState;

use super::Chrome;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub chrome: Chrome,
    /// Dishes that are featured and currently available.
    pub featured_items: Vec<MenuItem>,
    pub locations: Vec<Location>,
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<HomeTemplate, SiteError> {
    let chrome = Chrome::load(&state).await?;

    // A failing content query degrades the section rather than the page.
    let featured_items = MenuReader::new(state.pool()).featured().await.map_or_else(
        |e| {
            tracing::error!("Failed to fetch featured items: {e}");
            Vec::new()
        },
        |items| items,
    );

    let locations = LocationReader::new(state.pool()).list().await.map_or_else(
        |e| {
            tracing::error!("Failed to fetch locations: {e}");
            Vec::new()
        },
        |locations| locations,
    );

    Ok(HomeTemplate {
        chrome,
        featured_items,
        locations,
    })
}
