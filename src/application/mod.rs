//! Application layer services implementing business logic.
//!
//! Services coordinate repository calls and business rules, and give HTTP
//! handlers and the admin CLI one API to call.
//!
//! - [`services::link_service::LinkService`] - Key allocation, deduplication and lookup
//! - [`services::stats_service::StatsService`] - Visit recording and listing

pub mod services;
