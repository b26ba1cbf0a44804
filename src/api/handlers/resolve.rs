//! Dispatch for the single-segment key route.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use serde_json::json;

use super::{link_info::link_info, redirect::redirect};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::key_generator::is_well_formed;

/// Handles `GET /{key}` and `GET /{key}+`.
///
/// A trailing `+` selects the JSON info view, anything else redirects.
/// Segments that cannot be a key (digits, dots, too long) are answered with
/// 404 without touching the database.
pub async fn resolve_handler(
    State(state): State<AppState>,
    Path(segment): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let (key, info) = match segment.strip_suffix('+') {
        Some(key) => (key, true),
        None => (segment.as_str(), false),
    };

    if !is_well_formed(key) {
        return Err(AppError::not_found(
            "Short link not found",
            json!({ "key": key }),
        ));
    }

    if info {
        Ok(link_info(&state, key).await?.into_response())
    } else {
        redirect(&state, key, &headers).await
    }
}
