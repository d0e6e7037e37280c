//! About page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use zaatar_core::Location;

use crate::db::LocationReader;
use crate::error::SiteError;
use crate::filters;
use crate::state::AppState;

use super::Chrome;

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub chrome: Chrome,
    pub locations: Vec<Location>,
}

/// Display the about page.
#[instrument(skip(state))]
pub async fn about(State(state): State<AppState>) -> Result<AboutTemplate, SiteError> {
    let chrome = Chrome::load(&state).await?;
    let locations = LocationReader::new(state.pool()).list().await?;

    Ok(AboutTemplate { chrome, locations })
}
