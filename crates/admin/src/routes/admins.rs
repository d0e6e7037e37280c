//! Admin role management route handlers.
//!
//! The privileged boundary of the system. The handlers stay thin: they lift
//! the bearer credential and raw body off the request and hand both to the
//! role service, which re-validates the caller before every operation. The
//! body is deliberately taken as a raw string - an unauthenticated request
//! must get 401 no matter how mangled its payload is, so parsing happens
//! after the caller check inside the service.

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use tracing::instrument;

use zaatar_core::RoleGrant;

use crate::middleware::bearer_token;
use crate::state::AppState;

/// Build the admin role router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/admins", get(list).post(manage))
}

/// Acknowledgment for a successful grant/revoke.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// One admin grant in the list response.
#[derive(Debug, Serialize)]
pub struct AdminGrantView {
    pub id: String,
    pub user_id: String,
    pub email: String,
    pub role: String,
}

impl From<&RoleGrant> for AdminGrantView {
    fn from(grant: &RoleGrant) -> Self {
        Self {
            id: grant.id.to_string(),
            user_id: grant.account_id.to_string(),
            email: grant.email.to_string(),
            role: grant.role.to_string(),
        }
    }
}

/// List current admin role grants.
#[instrument(skip(state, headers))]
pub async fn list(State(state): State<AppState>, headers: HeaderMap) -> Response {
    match state
        .role_service()
        .list_admins(bearer_token(&headers))
        .await
    {
        Ok(grants) => {
            let views: Vec<AdminGrantView> = grants.iter().map(AdminGrantView::from).collect();
            Json(views).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Grant or revoke the admin role.
///
/// Body: `{"action": "add", "email": ...}` or
/// `{"action": "remove", "userId": ...}`.
#[instrument(skip(state, headers, body))]
pub async fn manage(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    // Raw bytes, not a Json extractor: a garbled body must not preempt the
    // caller check - 401 wins regardless of payload.
    match state
        .role_service()
        .execute(bearer_token(&headers), &String::from_utf8_lossy(&body))
        .await
    {
        Ok(()) => Json(SuccessResponse { success: true }).into_response(),
        Err(e) => e.into_response(),
    }
}
