//! Unified error handling for the admin API.
//!
//! Every failure leaves the boundary as the JSON envelope
//! `{"error": "..."}` with a status matching its kind. Internal details
//! (database errors and the like) are logged and reported to Sentry but
//! never leak to clients - except the role service's collaborator failures,
//! which deliberately propagate their diagnostic message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::auth::AuthError;
use crate::services::roles::RoleServiceError;

/// The JSON error envelope returned by every failing endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    /// Build an error response with the given status.
    #[must_use]
    pub fn response(status: StatusCode, message: impl Into<String>) -> Response {
        (
            status,
            Json(Self {
                error: message.into(),
            }),
        )
            .into_response()
    }
}

/// Application-level error type for the admin API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Resource not found.
    #[error("not found")]
    NotFound,

    /// Bad request from client.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // NotFound from the repository layer is a client-facing 404, not a
        // server fault.
        if let Self::Database(RepositoryError::NotFound) = self {
            return ErrorBody::response(StatusCode::NOT_FOUND, "not found");
        }

        // Log server errors with Sentry
        if matches!(self, Self::Database(_) | Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Admin request error"
            );
        }

        let (status, message) = match &self {
            Self::Database(_) | Self::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
            Self::NotFound => (StatusCode::NOT_FOUND, "not found".to_string()),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        ErrorBody::response(status, message)
    }
}

impl IntoResponse for RoleServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::InvalidAction
            | Self::MalformedRequest(_)
            | Self::UserNotFound
            | Self::SelfRevokeForbidden => StatusCode::BAD_REQUEST,
            Self::Collaborator(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if let Self::Collaborator(e) = &self {
            let event_id = sentry::capture_error(e);
            tracing::error!(
                error = %e,
                sentry_event_id = %event_id,
                "Role service collaborator failure"
            );
        }

        // The role service propagates diagnostic messages on 500 so the
        // dashboard can surface them verbatim.
        ErrorBody::response(status, self.to_string())
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidEmail(_) | Self::WeakPassword(_) | Self::AccountAlreadyExists => {
                StatusCode::BAD_REQUEST
            }
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Repository(_) | Self::PasswordHash => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Auth request error"
            );
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        ErrorBody::response(status, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::roles::CollaboratorError;

    fn status_of(response: Response) -> StatusCode {
        response.status()
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            status_of(AppError::NotFound.into_response()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(AppError::BadRequest("bad".to_string()).into_response()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::Internal("boom".to_string()).into_response()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(AppError::Database(RepositoryError::NotFound).into_response()),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_role_service_error_status_codes() {
        assert_eq!(
            status_of(RoleServiceError::Unauthorized.into_response()),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(RoleServiceError::Forbidden.into_response()),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status_of(RoleServiceError::InvalidAction.into_response()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(RoleServiceError::UserNotFound.into_response()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(RoleServiceError::SelfRevokeForbidden.into_response()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(
                RoleServiceError::Collaborator(CollaboratorError("down".to_string()))
                    .into_response()
            ),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_auth_error_status_codes() {
        assert_eq!(
            status_of(AuthError::InvalidCredentials.into_response()),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(AuthError::AccountAlreadyExists.into_response()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AuthError::PasswordHash.into_response()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
