//! Business logic services for the application layer.

pub mod link_service;
pub mod stats_service;

pub use link_service::{LinkPolicy, LinkService};
pub use stats_service::StatsService;
