//! Shared application context injected into every handler.

use std::sync::Arc;

use crate::application::services::{LinkService, StatsService};

/// Explicitly constructed application context.
///
/// Built once in [`crate::server::run`] (or by tests) and cloned per request
/// by axum. Holds no mutable state of its own.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub stats_service: Arc<StatsService>,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService>, stats_service: Arc<StatsService>) -> Self {
        Self {
            link_service,
            stats_service,
        }
    }
}
