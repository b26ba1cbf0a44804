//! Helpers used across the application:
//!
//! - [`key_generator`] - Random short key generation
//! - [`url_hash`] - Content hashing of URLs for deduplication

pub mod key_generator;
pub mod url_hash;
