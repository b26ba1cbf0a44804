#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;
use keylink::application::services::{LinkPolicy, LinkService, StatsService};
use keylink::domain::entities::{Link, NewLink, NewStatistic, Statistic};
use keylink::domain::repositories::{LinkRepository, StatsRepository};
use keylink::error::AppError;
use keylink::routes::app_router;
use keylink::state::AppState;
use keylink::utils::key_generator::{KeyGenerator, MAX_KEY_LENGTH};
use serde_json::json;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

pub const DOMAIN_URL: &str = "http://s.test";

/// In-memory stand-in for PostgreSQL that enforces the same uniqueness rules.
#[derive(Default)]
pub struct MemoryStore {
    links: Mutex<HashMap<String, Link>>,
    statistics: Mutex<Vec<Statistic>>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    /// Makes every following call fail as if the database were down.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn insert_link(&self, key: &str, url: &str) {
        let link = Link::new(key.to_string(), url.to_string(), None, Utc::now(), None);
        self.links.lock().unwrap().insert(key.to_string(), link);
    }

    pub fn statistics_for(&self, key: &str) -> Vec<Statistic> {
        self.statistics
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.link_id == key)
            .cloned()
            .collect()
    }

    fn check(&self) -> Result<(), AppError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::internal("Database error", json!({})));
        }
        Ok(())
    }
}

#[async_trait]
impl LinkRepository for MemoryStore {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        self.check()?;
        let mut links = self.links.lock().unwrap();

        if let Some(hash) = &new_link.url_hash
            && let Some(existing) = links
                .values()
                .find(|l| l.url_hash.as_ref() == Some(hash))
        {
            return Ok(existing.clone());
        }

        if links.contains_key(&new_link.key) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "links_pkey" }),
            ));
        }

        let link = Link::new(
            new_link.key.clone(),
            new_link.url,
            new_link.url_hash,
            Utc::now(),
            None,
        );
        links.insert(new_link.key, link.clone());

        Ok(link)
    }

    async fn find_by_key(&self, key: &str) -> Result<Option<Link>, AppError> {
        self.check()?;
        Ok(self.links.lock().unwrap().get(key).cloned())
    }

    async fn find_by_url_hash(&self, url_hash: &str) -> Result<Option<Link>, AppError> {
        self.check()?;
        Ok(self
            .links
            .lock()
            .unwrap()
            .values()
            .find(|l| l.url_hash.as_deref() == Some(url_hash))
            .cloned())
    }

    async fn count(&self) -> Result<i64, AppError> {
        self.check()?;
        Ok(self.links.lock().unwrap().len() as i64)
    }
}

#[async_trait]
impl StatsRepository for MemoryStore {
    async fn record_visit(&self, new_statistic: NewStatistic) -> Result<Statistic, AppError> {
        self.check()?;
        let mut links = self.links.lock().unwrap();
        let link = links.get_mut(&new_statistic.link_id).ok_or_else(|| {
            AppError::not_found(
                "Short link not found",
                json!({ "key": new_statistic.link_id }),
            )
        })?;
        link.count = Some(link.count.unwrap_or(0) + 1);

        let mut statistics = self.statistics.lock().unwrap();
        let statistic = Statistic {
            id: statistics.len() as i64 + 1,
            created: Utc::now(),
            link_id: new_statistic.link_id,
            user_agent: new_statistic.user_agent,
        };
        statistics.push(statistic.clone());

        Ok(statistic)
    }

    async fn list_for_link(&self, link_id: &str, limit: i64) -> Result<Vec<Statistic>, AppError> {
        self.check()?;
        let mut visits = self.statistics_for(link_id);
        visits.reverse();
        visits.truncate(limit as usize);
        Ok(visits)
    }

    async fn count_all(&self) -> Result<i64, AppError> {
        self.check()?;
        Ok(self.statistics.lock().unwrap().len() as i64)
    }
}

pub fn create_test_state(store: Arc<MemoryStore>, policy: LinkPolicy) -> AppState {
    let link_service = Arc::new(LinkService::new(
        store.clone(),
        KeyGenerator::default(),
        policy,
        DOMAIN_URL,
    ));
    let stats_service = Arc::new(StatsService::new(store));

    AppState::new(link_service, stats_service)
}

/// Test server over the full router, backed by a fresh in-memory store.
pub fn create_test_server(policy: LinkPolicy) -> (TestServer, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let state = create_test_state(store.clone(), policy);
    let server = TestServer::new(app_router(state)).unwrap();

    (server, store)
}

/// Connects to `DATABASE_URL` and applies migrations, or returns `None` when
/// no database is configured so the caller can skip.
pub async fn test_pool() -> Option<PgPool> {
    dotenvy::dotenv().ok();

    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping database test");
        return None;
    };

    let pool = PgPool::connect(&url).await.unwrap();
    sqlx::migrate!("./migrations").run(&pool).await.unwrap();

    Some(pool)
}

/// Random key of the widest length, so tests sharing a database do not collide.
pub fn unique_key() -> String {
    KeyGenerator::new(MAX_KEY_LENGTH).unwrap().generate()
}

pub async fn create_test_link(pool: &PgPool, key: &str, url: &str) {
    sqlx::query("INSERT INTO links (key, url) VALUES ($1, $2)")
        .bind(key)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn link_count(pool: &PgPool, key: &str) -> Option<i32> {
    sqlx::query_scalar("SELECT count FROM links WHERE key = $1")
        .bind(key)
        .fetch_one(pool)
        .await
        .unwrap()
}
