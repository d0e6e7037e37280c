//! Authentication extractors for the admin API.
//!
//! Content-management routes require an authenticated caller that holds the
//! admin role grant. The extractor resolves the bearer credential through
//! the same collaborator handles the role service uses, so the two paths
//! cannot drift apart.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION, request::Parts},
    response::{IntoResponse, Response},
};

use zaatar_core::Role;

use crate::error::ErrorBody;
use crate::models::Account;
use crate::state::AppState;

/// Extract the bearer token from the `Authorization` header, if present.
#[must_use]
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Extractor that requires an authenticated admin caller.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAdmin(admin): RequireAdmin,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", admin.email)
/// }
/// ```
pub struct RequireAdmin(pub Account);

/// Rejection for [`RequireAdmin`], mirroring the role service's envelope.
pub enum AdminAuthRejection {
    /// No or invalid bearer credential.
    Unauthorized,
    /// Valid caller without the admin grant.
    Forbidden,
    /// Collaborator failure while checking.
    Internal(String),
}

impl IntoResponse for AdminAuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthorized => {
                ErrorBody::response(StatusCode::UNAUTHORIZED, "Unauthorized")
            }
            Self::Forbidden => {
                ErrorBody::response(StatusCode::FORBIDDEN, "Forbidden: not an admin")
            }
            Self::Internal(message) => {
                tracing::error!(error = %message, "Admin auth check failed");
                ErrorBody::response(StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        }
    }
}

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AdminAuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let bearer =
            bearer_token(&parts.headers).ok_or(AdminAuthRejection::Unauthorized)?;

        let account = state
            .identity()
            .authenticate(bearer)
            .await
            .map_err(|e| AdminAuthRejection::Internal(e.to_string()))?
            .ok_or(AdminAuthRejection::Unauthorized)?;

        let is_admin = state
            .roles()
            .has_role(account.id, Role::Admin)
            .await
            .map_err(|e| AdminAuthRejection::Internal(e.to_string()))?;

        if !is_admin {
            return Err(AdminAuthRejection::Forbidden);
        }

        Ok(Self(account))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc123"));
        assert_eq!(bearer_token(&headers), Some("abc123"));
    }

    #[test]
    fn test_bearer_token_missing_or_malformed() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc123"));
        assert_eq!(bearer_token(&headers), None);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert_eq!(bearer_token(&headers), None);
    }
}
