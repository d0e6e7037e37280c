//! Category route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::{get, put},
};
use serde::Deserialize;
use tracing::instrument;

use zaatar_core::{Category, CategoryId};

use crate::db::CategoryRepository;
use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// Build the categories router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/categories", get(list).post(create))
        .route("/api/categories/{id}", put(update).delete(remove))
}

/// Request body for creating or renaming a category.
#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    pub name: String,
}

fn validated_name(name: &str) -> Result<&str, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("name is required".to_string()));
    }
    Ok(name)
}

/// List all categories.
#[instrument(skip(state))]
pub async fn list(RequireAdmin(_admin): RequireAdmin, State(state): State<AppState>) -> Response {
    match CategoryRepository::new(state.pool()).list().await {
        Ok(categories) => Json::<Vec<Category>>(categories).into_response(),
        Err(e) => AppError::from(e).into_response(),
    }
}

/// Create a category. New categories sort after the existing ones.
#[instrument(skip(state, request))]
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(request): Json<CategoryRequest>,
) -> Response {
    let name = match validated_name(&request.name) {
        Ok(name) => name.to_owned(),
        Err(e) => return e.into_response(),
    };

    let repo = CategoryRepository::new(state.pool());

    let sort_order = match repo.count().await {
        Ok(count) => i32::try_from(count).unwrap_or(i32::MAX),
        Err(e) => return AppError::from(e).into_response(),
    };

    match repo.create(&name, sort_order).await {
        Ok(category) => {
            tracing::info!(by = %admin.id, category = %category.id, "category created");
            Json(category).into_response()
        }
        Err(e) => AppError::from(e).into_response(),
    }
}

/// Rename a category.
#[instrument(skip(state, request))]
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
    Json(request): Json<CategoryRequest>,
) -> Response {
    let name = match validated_name(&request.name) {
        Ok(name) => name.to_owned(),
        Err(e) => return e.into_response(),
    };

    match CategoryRepository::new(state.pool()).update(id, &name).await {
        Ok(category) => {
            tracing::info!(by = %admin.id, category = %id, "category renamed");
            Json(category).into_response()
        }
        Err(e) => AppError::from(e).into_response(),
    }
}

/// Delete a category.
#[instrument(skip(state))]
pub async fn remove(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
) -> Response {
    match CategoryRepository::new(state.pool()).delete(id).await {
        Ok(()) => {
            tracing::info!(by = %admin.id, category = %id, "category deleted");
            Json(serde_json::json!({ "success": true })).into_response()
        }
        Err(e) => AppError::from(e).into_response(),
    }
}
