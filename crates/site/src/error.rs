//! Unified error handling for the public site.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::db::RepositoryError;

/// Application-level error type for the public site.
#[derive(Debug, Error)]
pub enum SiteError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Page or entity not found.
    #[error("Not found")]
    NotFound,

    /// Template rendering failed.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        // The settings row missing means migrations haven't run; everything
        // else from the repository layer is a server fault.
        let status = match &self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Site request error"
            );
        }

        let body = match status {
            StatusCode::NOT_FOUND => "<h1>404</h1><p>This page is off the menu.</p>",
            _ => "<h1>500</h1><p>Something went wrong in the kitchen.</p>",
        };

        (status, Html(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            SiteError::NotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            SiteError::Database(RepositoryError::NotFound)
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
