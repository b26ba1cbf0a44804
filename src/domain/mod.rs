//! Domain layer containing business entities and repository contracts.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Business rules live in [`crate::application::services`].
//!
//! # Visit Flow
//!
//! 1. HTTP handler resolves a key through the link service
//! 2. A [`entities::NewStatistic`] is built from the request's user agent
//! 3. [`repositories::StatsRepository::record_visit`] stores it and bumps the
//!    counter in one transaction
//! 4. The handler answers with a 301 redirect

pub mod entities;
pub mod repositories;
