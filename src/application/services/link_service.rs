//! Link creation and retrieval service.

use std::sync::Arc;

use crate::domain::entities::{Link, MAX_URL_LENGTH, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::key_generator::KeyGenerator;
use crate::utils::url_hash::url_hash;
use serde_json::json;

/// How a submitted URL that is already stored is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkPolicy {
    /// The same URL always resolves to the same key.
    #[default]
    Deduplicate,
    /// Every submission mints a new key.
    AlwaysNew,
}

/// Service for creating and resolving short links.
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
    key_generator: KeyGenerator,
    policy: LinkPolicy,
    domain_url: String,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// `domain_url` is the public base short links are built on, such as
    /// `https://s.example.com`.
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        key_generator: KeyGenerator,
        policy: LinkPolicy,
        domain_url: impl Into<String>,
    ) -> Self {
        Self {
            link_repository,
            key_generator,
            policy,
            domain_url: domain_url.into(),
        }
    }

    pub fn policy(&self) -> LinkPolicy {
        self.policy
    }

    /// Returns the link for `url`, creating it if needed.
    ///
    /// # Deduplication
    ///
    /// Under [`LinkPolicy::Deduplicate`] the URL's content hash is looked up
    /// first and an existing link is returned unchanged. Under
    /// [`LinkPolicy::AlwaysNew`] a fresh link is stored every time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] unless the URL is 1-600 characters.
    /// Returns [`AppError::Conflict`] if the generated key is already taken.
    /// Keys are not regenerated.
    pub async fn create_or_get(&self, url: String) -> Result<Link, AppError> {
        let length = url.chars().count();
        if length == 0 || length > MAX_URL_LENGTH {
            return Err(AppError::bad_request(
                "URL must be 1-600 characters",
                json!({ "fields": ["url"], "length": length }),
            ));
        }

        let hash = match self.policy {
            LinkPolicy::Deduplicate => {
                let hash = url_hash(&url);

                if let Some(existing) = self.link_repository.find_by_url_hash(&hash).await? {
                    tracing::debug!(key = %existing.key, "URL already shortened");
                    return Ok(existing);
                }

                Some(hash)
            }
            LinkPolicy::AlwaysNew => None,
        };

        let new_link = NewLink {
            key: self.key_generator.generate(),
            url,
            url_hash: hash,
        };

        let link = self.link_repository.create(new_link).await?;
        tracing::info!(key = %link.key, "short link created");

        Ok(link)
    }

    /// Resolves a short key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this key.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn find_by_key(&self, key: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_key(key)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "key": key })))
    }

    /// Counts stored links.
    pub async fn count_links(&self) -> Result<i64, AppError> {
        self.link_repository.count().await
    }

    /// Builds the fully-qualified short URL for a key.
    pub fn short_url(&self, key: &str) -> String {
        format!("{}/{}", self.domain_url.trim_end_matches('/'), key)
    }
}
