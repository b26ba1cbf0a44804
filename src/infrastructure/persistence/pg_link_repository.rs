//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for link storage and retrieval.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let inserted = sqlx::query_as::<_, Link>(
            r#"
            INSERT INTO links (key, url, url_hash)
            VALUES ($1, $2, $3)
            ON CONFLICT (url_hash) DO NOTHING
            RETURNING key, url, url_hash, created, count
            "#,
        )
        .bind(&new_link.key)
        .bind(&new_link.url)
        .bind(&new_link.url_hash)
        .fetch_optional(self.pool.as_ref())
        .await?;

        if let Some(link) = inserted {
            return Ok(link);
        }

        // Only a hash conflict suppresses the insert, so the hash is set here.
        let url_hash = new_link.url_hash.as_deref().unwrap_or_default();
        tracing::debug!(url_hash, "link inserted concurrently, reading existing row");

        self.find_by_url_hash(url_hash).await?.ok_or_else(|| {
            AppError::internal(
                "Link vanished after hash conflict",
                serde_json::json!({ "url_hash": url_hash }),
            )
        })
    }

    async fn find_by_key(&self, key: &str) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            SELECT key, url, url_hash, created, count
            FROM links
            WHERE key = $1
            "#,
        )
        .bind(key)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn find_by_url_hash(&self, url_hash: &str) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            SELECT key, url, url_hash, created, count
            FROM links
            WHERE url_hash = $1
            "#,
        )
        .bind(url_hash)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
