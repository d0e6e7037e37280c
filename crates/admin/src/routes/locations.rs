//! Location route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::{get, put},
};
use serde::Deserialize;
use tracing::instrument;

use zaatar_core::{Location, LocationId};

use crate::db::LocationRepository;
use crate::db::locations::LocationInput;
use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// Build the locations router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/locations", get(list).post(create))
        .route("/api/locations/{id}", put(update).delete(remove))
}

/// Request body for creating or updating a location.
#[derive(Debug, Deserialize)]
pub struct LocationRequest {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub whatsapp_number: Option<String>,
    pub whatsapp_link: Option<String>,
    pub maps_embed: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

impl LocationRequest {
    fn into_input(self) -> Result<LocationInput, AppError> {
        if self.name.trim().is_empty()
            || self.address.trim().is_empty()
            || self.phone.trim().is_empty()
        {
            return Err(AppError::BadRequest(
                "name, address and phone are required".to_string(),
            ));
        }

        Ok(LocationInput {
            name: self.name,
            address: self.address,
            phone: self.phone,
            whatsapp_number: self.whatsapp_number,
            whatsapp_link: self.whatsapp_link,
            maps_embed: self.maps_embed,
            sort_order: self.sort_order,
        })
    }
}

/// List all locations.
#[instrument(skip(state))]
pub async fn list(RequireAdmin(_admin): RequireAdmin, State(state): State<AppState>) -> Response {
    match LocationRepository::new(state.pool()).list().await {
        Ok(locations) => Json::<Vec<Location>>(locations).into_response(),
        Err(e) => AppError::from(e).into_response(),
    }
}

/// Create a location.
#[instrument(skip(state, request))]
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(request): Json<LocationRequest>,
) -> Response {
    let input = match request.into_input() {
        Ok(input) => input,
        Err(e) => return e.into_response(),
    };

    match LocationRepository::new(state.pool()).create(&input).await {
        Ok(location) => {
            tracing::info!(by = %admin.id, location = %location.id, "location created");
            Json(location).into_response()
        }
        Err(e) => AppError::from(e).into_response(),
    }
}

/// Update a location.
#[instrument(skip(state, request))]
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<LocationId>,
    Json(request): Json<LocationRequest>,
) -> Response {
    let input = match request.into_input() {
        Ok(input) => input,
        Err(e) => return e.into_response(),
    };

    match LocationRepository::new(state.pool()).update(id, &input).await {
        Ok(location) => {
            tracing::info!(by = %admin.id, location = %id, "location updated");
            Json(location).into_response()
        }
        Err(e) => AppError::from(e).into_response(),
    }
}

/// Delete a location.
#[instrument(skip(state))]
pub async fn remove(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<LocationId>,
) -> Response {
    match LocationRepository::new(state.pool()).delete(id).await {
        Ok(()) => {
            tracing::info!(by = %admin.id, location = %id, "location deleted");
            Json(serde_json::json!({ "success": true })).into_response()
        }
        Err(e) => AppError::from(e).into_response(),
    }
}
