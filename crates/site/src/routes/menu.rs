//! Menu listing and item detail route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use tracing::instrument;

use zaatar_core::{Category, CategoryId, MenuItem, MenuItemId};

use crate::db::MenuReader;
use crate::error::SiteError;
use crate::filters;
use crate::state::AppState;

use super::Chrome;

/// Query parameters for the menu listing.
#[derive(Debug, Deserialize)]
pub struct MenuParams {
    /// Category filter; anything that isn't a known id just shows everything.
    pub category: Option<String>,
}

/// Menu listing template.
#[derive(Template, WebTemplate)]
#[template(path = "menu.html")]
pub struct MenuTemplate {
    pub chrome: Chrome,
    pub categories: Vec<Category>,
    pub items: Vec<MenuItem>,
    pub active_category: Option<CategoryId>,
}

impl MenuTemplate {
    /// Whether this category is the active filter (used by the tab bar).
    fn is_active(&self, id: &CategoryId) -> bool {
        self.active_category == Some(*id)
    }
}

/// Menu item detail template.
#[derive(Template, WebTemplate)]
#[template(path = "menu_item.html")]
pub struct MenuItemTemplate {
    pub chrome: Chrome,
    pub item: MenuItem,
}

/// Display the menu, optionally filtered by category.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<MenuParams>,
) -> Result<MenuTemplate, SiteError> {
    let chrome = Chrome::load(&state).await?;
    let reader = MenuReader::new(state.pool());

    let active_category: Option<CategoryId> =
        params.category.as_deref().and_then(|s| s.parse().ok());

    let categories = reader.categories().await?;
    let items = reader.items(active_category).await?;

    Ok(MenuTemplate {
        chrome,
        categories,
        items,
        active_category,
    })
}

/// Display a single menu item.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<MenuItemTemplate, SiteError> {
    let chrome = Chrome::load(&state).await?;

    let id: MenuItemId = id.parse().map_err(|_| SiteError::NotFound)?;
    let item = MenuReader::new(state.pool())
        .item(id)
        .await?
        .ok_or(SiteError::NotFound)?;

    Ok(MenuItemTemplate { chrome, item })
}
