//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// Widest URL the `links.url` column holds, in characters.
pub const MAX_URL_LENGTH: usize = 600;

/// Display format for `created`, e.g. `2024-06-01 13:45:07`.
pub const CREATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A stored mapping from a short key to its original URL.
///
/// `count` is nullable in storage; a link that was never visited has no
/// counter at all. Use [`Link::visits`] when a number is needed.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Link {
    pub key: String,
    pub url: String,
    pub url_hash: Option<String>,
    pub created: DateTime<Utc>,
    pub count: Option<i32>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        key: String,
        url: String,
        url_hash: Option<String>,
        created: DateTime<Utc>,
        count: Option<i32>,
    ) -> Self {
        Self {
            key,
            url,
            url_hash,
            created,
            count,
        }
    }

    /// Visit counter, treating an absent value as zero.
    pub fn visits(&self) -> i32 {
        self.count.unwrap_or(0)
    }

    pub fn created_display(&self) -> String {
        self.created.format(CREATED_FORMAT).to_string()
    }
}

/// Input data for creating a new link.
///
/// `url_hash` is `None` when deduplication is disabled, which lets the same
/// URL be stored under any number of keys.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub key: String,
    pub url: String,
    pub url_hash: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_link_without_counter_has_zero_visits() {
        let link = Link::new(
            "AbCdE".to_string(),
            "http://example.com".to_string(),
            None,
            Utc::now(),
            None,
        );

        assert_eq!(link.visits(), 0);
    }

    #[test]
    fn test_link_visits() {
        let link = Link::new(
            "AbCdE".to_string(),
            "http://example.com".to_string(),
            None,
            Utc::now(),
            Some(7),
        );

        assert_eq!(link.visits(), 7);
    }

    #[test]
    fn test_created_display() {
        let created = Utc.with_ymd_and_hms(2024, 6, 1, 13, 45, 7).unwrap();
        let link = Link::new(
            "AbCdE".to_string(),
            "http://example.com".to_string(),
            None,
            created,
            None,
        );

        assert_eq!(link.created_display(), "2024-06-01 13:45:07");
    }
}
