//! Link info view (`GET /{key}+`).

use axum::Json;

use crate::api::dto::link::LinkResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the link projection for `key` without recording a visit.
///
/// # Errors
///
/// Returns 404 if the key is unknown.
pub async fn link_info(state: &AppState, key: &str) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.find_by_key(key).await?;
    let short_url = state.link_service.short_url(&link.key);

    Ok(Json(LinkResponse::new(&link, short_url)))
}
