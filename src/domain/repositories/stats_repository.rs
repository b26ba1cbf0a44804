//! Repository trait for visit statistics.

use crate::domain::entities::{NewStatistic, Statistic};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for recording and reading visits.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStatsRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_stats.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Records a visit and bumps the link's counter in one transaction.
    ///
    /// An absent counter counts as zero before the increment. If either write
    /// fails, neither is kept.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the link does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn record_visit(&self, new_statistic: NewStatistic) -> Result<Statistic, AppError>;

    /// Lists the most recent visits of a link, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_for_link(&self, link_id: &str, limit: i64) -> Result<Vec<Statistic>, AppError>;

    /// Counts all recorded visits.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_all(&self) -> Result<i64, AppError>;
}
