//! Handler for link creation.

use axum::{
    Json,
    extract::{Form, State, rejection::FormRejection},
};
use validator::Validate;

use crate::api::dto::link::{CreateLinkForm, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Shortens a URL.
///
/// # Endpoint
///
/// `POST /` with form field `url`
///
/// # Response
///
/// 200 with the link projection. With deduplication enabled, submitting a URL
/// that is already stored returns the existing link and its current count.
///
/// # Errors
///
/// Returns 400 if the form is malformed or `url` is empty or too long.
/// Returns 409 if the generated key collides with a stored one.
pub async fn create_link_handler(
    State(state): State<AppState>,
    form: Result<Form<CreateLinkForm>, FormRejection>,
) -> Result<Json<LinkResponse>, AppError> {
    let Form(form) = form?;
    form.validate()?;

    let link = state.link_service.create_or_get(form.url).await?;
    let short_url = state.link_service.short_url(&link.key);

    Ok(Json(LinkResponse::new(&link, short_url)))
}
