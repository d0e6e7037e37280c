//! Image upload route handler.
//!
//! Uploaded files land in the configured uploads directory, which the site
//! binary serves publicly at `/uploads`. The response carries the public URL
//! so the dashboard can store it straight into a content field.

use axum::{
    Json, Router,
    extract::{Multipart, State},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::instrument;
use uuid::Uuid;

use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// File extensions accepted for upload.
const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif", "svg", "ico"];

/// Maximum upload size in bytes (8 MiB).
const MAX_UPLOAD_BYTES: usize = 8 * 1024 * 1024;

/// Build the images router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/images", post(upload))
}

/// Response after a successful upload.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}

fn extension_of(filename: &str) -> Option<String> {
    let ext = filename.rsplit('.').next()?.to_ascii_lowercase();
    ALLOWED_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
}

/// Upload an image (multipart form, first file field wins).
#[instrument(skip(state, multipart))]
pub async fn upload(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Response {
    // First field carrying a filename wins; fields are consumed within the
    // iteration so no borrow outlives the loop.
    let (ext, bytes) = loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => {
                return AppError::BadRequest("no file in upload".to_string()).into_response();
            }
            Err(e) => {
                return AppError::BadRequest(format!("invalid multipart body: {e}"))
                    .into_response();
            }
        };

        let Some(filename) = field.file_name() else {
            continue;
        };
        let Some(ext) = extension_of(filename) else {
            return AppError::BadRequest(format!(
                "unsupported file type (allowed: {})",
                ALLOWED_EXTENSIONS.join(", ")
            ))
            .into_response();
        };

        match field.bytes().await {
            Ok(bytes) => break (ext, bytes),
            Err(e) => {
                return AppError::BadRequest(format!("failed to read upload: {e}"))
                    .into_response();
            }
        }
    };

    if bytes.len() > MAX_UPLOAD_BYTES {
        return AppError::BadRequest("file too large".to_string()).into_response();
    }

    let filename = format!("{}.{ext}", Uuid::new_v4());
    let dir = state.config().uploads_dir.clone();
    let path = dir.join(&filename);

    if let Err(e) = tokio::fs::create_dir_all(&dir).await {
        return AppError::Internal(format!("failed to create uploads dir: {e}")).into_response();
    }
    if let Err(e) = tokio::fs::write(&path, &bytes).await {
        return AppError::Internal(format!("failed to store upload: {e}")).into_response();
    }

    let url = state.config().public_upload_url(&filename);
    tracing::info!(by = %admin.id, %filename, size = bytes.len(), "image uploaded");

    Json(UploadResponse { url }).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_allowlist() {
        assert_eq!(extension_of("photo.JPG").as_deref(), Some("jpg"));
        assert_eq!(extension_of("logo.svg").as_deref(), Some("svg"));
        assert_eq!(extension_of("archive.tar.gz"), None);
        assert_eq!(extension_of("script.sh"), None);
        assert_eq!(extension_of("noextension"), None);
    }
}
