//! Short key redirect.

use axum::{
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Resolves `key`, records the visit and answers `301 Moved Permanently`.
///
/// The visit is stored before the response is built; if recording fails the
/// client gets the error instead of the redirect.
///
/// # Errors
///
/// Returns 404 if the key is unknown.
/// Returns 500 if the stored URL cannot be sent as a `Location` header.
pub async fn redirect(
    state: &AppState,
    key: &str,
    headers: &HeaderMap,
) -> Result<Response, AppError> {
    let link = state.link_service.find_by_key(key).await?;

    let location = HeaderValue::try_from(link.url.as_str()).map_err(|_| {
        AppError::internal(
            "Stored URL is not a valid Location header",
            json!({ "key": key }),
        )
    })?;

    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok());

    state.stats_service.record_visit(&link, user_agent).await?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}
