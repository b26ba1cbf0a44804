//! Statistic entity representing a single resolved redirect.

use chrono::{DateTime, Utc};

/// Longest user agent stored; the column is `VARCHAR(255)`.
pub const MAX_USER_AGENT_CHARS: usize = 255;

/// One visit of a short link.
///
/// Statistics are written once and never updated.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Statistic {
    pub id: i64,
    pub created: DateTime<Utc>,
    pub link_id: String,
    pub user_agent: String,
}

/// Input data for recording a visit.
///
/// The timestamp and id are assigned by the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStatistic {
    pub link_id: String,
    pub user_agent: String,
}

impl NewStatistic {
    /// Builds a visit record, truncating the user agent to the column width.
    ///
    /// A missing `User-Agent` header is recorded as an empty string.
    pub fn new(link_id: impl Into<String>, user_agent: Option<&str>) -> Self {
        let user_agent = user_agent
            .unwrap_or_default()
            .chars()
            .take(MAX_USER_AGENT_CHARS)
            .collect();

        Self {
            link_id: link_id.into(),
            user_agent,
        }
    }
}
