//! Contact page route handler.

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

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub chrome: Chrome,
    pub locations: Vec<Location>,
}

/// Display the contact page.
#[instrument(skip(state))]
pub async fn contact(State(state): State<AppState>) -> Result<ContactTemplate, SiteError> {
    let chrome = Chrome::load(&state).await?;
    let locations = LocationReader::new(state.pool()).list().await?;

    Ok(ContactTemplate { chrome, locations })
}
