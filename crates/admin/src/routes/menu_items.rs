//! Menu item route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use tracing::instrument;

use zaatar_core::{CategoryId, MenuItem, MenuItemId, Price};

use crate::db::MenuItemRepository;
use crate::db::menu_items::MenuItemInput;
use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// Build the menu items router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/menu-items", get(list).post(create))
        .route("/api/menu-items/{id}", get(read).put(update).delete(remove))
}

/// Query parameters for the list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub category: Option<CategoryId>,
}

/// Request body for creating or updating a menu item.
#[derive(Debug, Deserialize)]
pub struct MenuItemRequest {
    pub name: String,
    pub description: Option<String>,
    pub price: Price,
    pub category_id: Option<CategoryId>,
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default)]
    pub is_featured: bool,
    pub tag: Option<String>,
}

const fn default_true() -> bool {
    true
}

impl MenuItemRequest {
    fn into_input(self) -> Result<MenuItemInput, AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::BadRequest("name is required".to_string()));
        }
        if self.price.amount().is_sign_negative() {
            return Err(AppError::BadRequest("price cannot be negative".to_string()));
        }

        Ok(MenuItemInput {
            name: self.name,
            description: self.description.filter(|d| !d.trim().is_empty()),
            price: self.price,
            category_id: self.category_id,
            image_url: self.image_url,
            is_available: self.is_available,
            is_featured: self.is_featured,
            tag: self.tag.filter(|t| !t.trim().is_empty()),
        })
    }
}

/// List menu items, optionally filtered by category.
#[instrument(skip(state))]
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Response {
    match MenuItemRepository::new(state.pool())
        .list(params.category)
        .await
    {
        Ok(items) => Json::<Vec<MenuItem>>(items).into_response(),
        Err(e) => AppError::from(e).into_response(),
    }
}

/// Read one menu item.
#[instrument(skip(state))]
pub async fn read(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<MenuItemId>,
) -> Response {
    match MenuItemRepository::new(state.pool()).get(id).await {
        Ok(Some(item)) => Json(item).into_response(),
        Ok(None) => AppError::NotFound.into_response(),
        Err(e) => AppError::from(e).into_response(),
    }
}

/// Create a menu item.
#[instrument(skip(state, request))]
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(request): Json<MenuItemRequest>,
) -> Response {
    let input = match request.into_input() {
        Ok(input) => input,
        Err(e) => return e.into_response(),
    };

    match MenuItemRepository::new(state.pool()).create(&input).await {
        Ok(item) => {
            tracing::info!(by = %admin.id, item = %item.id, "menu item created");
            Json(item).into_response()
        }
        Err(e) => AppError::from(e).into_response(),
    }
}

/// Update a menu item.
#[instrument(skip(state, request))]
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<MenuItemId>,
    Json(request): Json<MenuItemRequest>,
) -> Response {
    let input = match request.into_input() {
        Ok(input) => input,
        Err(e) => return e.into_response(),
    };

    match MenuItemRepository::new(state.pool()).update(id, &input).await {
        Ok(item) => {
            tracing::info!(by = %admin.id, item = %id, "menu item updated");
            Json(item).into_response()
        }
        Err(e) => AppError::from(e).into_response(),
    }
}

/// Delete a menu item.
#[instrument(skip(state))]
pub async fn remove(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<MenuItemId>,
) -> Response {
    match MenuItemRepository::new(state.pool()).delete(id).await {
        Ok(()) => {
            tracing::info!(by = %admin.id, item = %id, "menu item deleted");
            Json(serde_json::json!({ "success": true })).into_response()
        }
        Err(e) => AppError::from(e).into_response(),
    }
}
