//! Fallback responses for `GET /`, unmatched routes and unsupported methods.

use axum::http::{Method, Uri};
use serde_json::json;

use crate::error::AppError;

/// Always answers 404 with the JSON error envelope.
pub async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found("Not found", json!({ "path": uri.path() }))
}

/// Answers 405 for a known path requested with the wrong method.
pub async fn method_not_allowed_handler(method: Method, uri: Uri) -> AppError {
    AppError::method_not_allowed(
        "Method not allowed",
        json!({ "path": uri.path(), "method": method.as_str() }),
    )
}
