//! Authentication route handlers.

use axum::{
    Json, Router,
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use zaatar_core::{AccountId, Role};

use crate::middleware::bearer_token;
use crate::services::AuthService;
use crate::state::AppState;

/// Build the auth router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
}

/// Request body for registration and login.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

/// Response after successful registration.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub user_id: AccountId,
}

/// Response after successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user_id: AccountId,
    pub email: String,
    pub is_admin: bool,
    pub expires_at: DateTime<Utc>,
}

/// Acknowledgment for logout.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Create a new account.
///
/// Signing up confers no role; admin rights are granted separately.
#[instrument(skip(state, request), fields(email = %request.email))]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Response {
    let auth = AuthService::new(state.pool(), state.config().token_ttl_hours);

    match auth.register(&request.email, &request.password).await {
        Ok(account) => {
            tracing::info!(user_id = %account.id, "account registered");
            Json(RegisterResponse {
                success: true,
                user_id: account.id,
            })
            .into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Login with email and password, issuing a bearer token.
#[instrument(skip(state, request), fields(email = %request.email))]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Response {
    let auth = AuthService::new(state.pool(), state.config().token_ttl_hours);

    let issued = match auth.login(&request.email, &request.password).await {
        Ok(issued) => issued,
        Err(e) => return e.into_response(),
    };

    // Tell the dashboard up front whether the admin tabs are worth showing.
    let is_admin = match state.roles().has_role(issued.account.id, Role::Admin).await {
        Ok(is_admin) => is_admin,
        Err(e) => {
            tracing::warn!("admin check failed during login: {e}");
            false
        }
    };

    Json(LoginResponse {
        token: issued.token,
        user_id: issued.account.id,
        email: issued.account.email.into_inner(),
        is_admin,
        expires_at: issued.expires_at,
    })
    .into_response()
}

/// Revoke the presented bearer token. Idempotent; succeeds even without one.
#[instrument(skip(state, headers))]
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(bearer) = bearer_token(&headers) {
        let auth = AuthService::new(state.pool(), state.config().token_ttl_hours);
        if let Err(e) = auth.logout(bearer).await {
            return e.into_response();
        }
    }

    Json(SuccessResponse { success: true }).into_response()
}
