//! Visit statistics service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewStatistic, Statistic};
use crate::domain::repositories::StatsRepository;
use crate::error::AppError;

/// Default number of visits returned by [`StatsService::recent_visits`].
pub const DEFAULT_VISIT_LIMIT: i64 = 50;

/// Service for recording and reading link visits.
pub struct StatsService {
    repository: Arc<dyn StatsRepository>,
}

impl StatsService {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<dyn StatsRepository>) -> Self {
        Self { repository }
    }

    /// Records one visit of `link`.
    ///
    /// The counter increment and the statistic row are committed together.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the link disappeared.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn record_visit(
        &self,
        link: &Link,
        user_agent: Option<&str>,
    ) -> Result<Statistic, AppError> {
        let new_statistic = NewStatistic::new(link.key.clone(), user_agent);
        let statistic = self.repository.record_visit(new_statistic).await?;

        tracing::debug!(key = %link.key, "visit recorded");
        Ok(statistic)
    }

    /// Lists the most recent visits of a link, newest first.
    ///
    /// A non-positive `limit` falls back to [`DEFAULT_VISIT_LIMIT`].
    pub async fn recent_visits(&self, key: &str, limit: i64) -> Result<Vec<Statistic>, AppError> {
        let limit = if limit > 0 { limit } else { DEFAULT_VISIT_LIMIT };
        self.repository.list_for_link(key, limit).await
    }

    /// Counts all recorded visits.
    pub async fn count_visits(&self) -> Result<i64, AppError> {
        self.repository.count_all().await
    }
}
