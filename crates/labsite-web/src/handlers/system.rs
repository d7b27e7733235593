//! Liveness probe and the catch-all 404.

use axum::http::Uri;

use labsite_common::error::ApiError;

/// GET /healthz
pub async fn healthz() -> &'static str {
    "ok"
}

/// Any path no route or public file answers.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}
