//! HTTP request handlers.
//!
//! `GET /{key}` serves both the redirect and the `+`-suffixed info view;
//! [`resolve_handler`] dispatches between [`redirect`] and [`link_info`].

pub mod create_link;
pub mod health;
pub mod link_info;
pub mod not_found;
pub mod redirect;
pub mod resolve;

pub use create_link::create_link_handler;
pub use health::health_handler;
pub use not_found::{method_not_allowed_handler, not_found_handler};
pub use resolve::resolve_handler;
