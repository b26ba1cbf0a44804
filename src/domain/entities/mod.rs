//! Core domain entities.
//!
//! - [`Link`] - A short key mapped to an original URL
//! - [`Statistic`] - One recorded visit of a link
//!
//! `NewLink` and `NewStatistic` carry the fields supplied on insert; the
//! database fills in timestamps and ids.

pub mod link;
pub mod statistic;

pub use link::{Link, MAX_URL_LENGTH, NewLink};
pub use statistic::{NewStatistic, Statistic};
