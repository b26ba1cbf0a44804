//! Router configuration.
//!
//! # Route Structure
//!
//! - `POST /`         - Shorten a URL (form field `url`)
//! - `GET  /`         - Always 404
//! - `GET  /health`   - Health check
//! - `GET  /{key}`    - Redirect (301) and record a visit
//! - `GET  /{key}+`   - Link info as JSON
//!
//! Everything else falls through to a JSON 404, and a known path with the
//! wrong method gets a JSON 405.

use crate::api::handlers::{
    create_link_handler, health_handler, method_not_allowed_handler, not_found_handler,
    resolve_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(not_found_handler).post(create_link_handler))
        .route("/health", get(health_handler))
        .route("/{key}", get(resolve_handler))
        .method_not_allowed_fallback(method_not_allowed_handler)
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer())
}
