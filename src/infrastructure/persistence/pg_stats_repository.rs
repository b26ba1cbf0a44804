//! PostgreSQL implementation of statistics repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewStatistic, Statistic};
use crate::domain::repositories::StatsRepository;
use crate::error::AppError;

/// PostgreSQL repository for visit statistics.
pub struct PgStatsRepository {
    pool: Arc<PgPool>,
}

impl PgStatsRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatsRepository for PgStatsRepository {
    async fn record_visit(&self, new_statistic: NewStatistic) -> Result<Statistic, AppError> {
        let mut tx = self.pool.begin().await?;

        let bumped = sqlx::query(
            r#"
            UPDATE links
            SET count = COALESCE(count, 0) + 1
            WHERE key = $1
            "#,
        )
        .bind(&new_statistic.link_id)
        .execute(&mut *tx)
        .await?;

        if bumped.rows_affected() == 0 {
            // Dropping `tx` rolls back.
            return Err(AppError::not_found(
                "Short link not found",
                json!({ "key": new_statistic.link_id }),
            ));
        }

        let statistic = sqlx::query_as::<_, Statistic>(
            r#"
            INSERT INTO statistics (link_id, user_agent)
            VALUES ($1, $2)
            RETURNING id, created, link_id, user_agent
            "#,
        )
        .bind(&new_statistic.link_id)
        .bind(&new_statistic.user_agent)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(statistic)
    }

    async fn list_for_link(&self, link_id: &str, limit: i64) -> Result<Vec<Statistic>, AppError> {
        let statistics = sqlx::query_as::<_, Statistic>(
            r#"
            SELECT id, created, link_id, user_agent
            FROM statistics
            WHERE link_id = $1
            ORDER BY created DESC, id DESC
            LIMIT $2
            "#,
        )
        .bind(link_id)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(statistics)
    }

    async fn count_all(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM statistics")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
