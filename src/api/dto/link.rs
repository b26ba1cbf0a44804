//! DTOs for link creation and link info.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Form body of `POST /`.
///
/// Only the length is checked, against the `links.url` column width. The URL
/// is stored as submitted.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkForm {
    #[validate(length(min = 1, max = 600, message = "URL must be 1-600 characters"))]
    pub url: String,
}

/// JSON projection of a link, returned on creation and by `GET /{key}+`.
///
/// ```json
/// {
///   "key": "AbCdE",
///   "url": "http://example.com/a/very/long/path",
///   "created": "2024-06-01 13:45:07",
///   "link": "http://localhost:3000/AbCdE",
///   "count": 0
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkResponse {
    pub key: String,
    pub url: String,
    pub created: String,
    pub link: String,
    pub count: i32,
}

impl LinkResponse {
    /// Projects `link`, with `short_url` as its fully-qualified short link.
    pub fn new(link: &Link, short_url: String) -> Self {
        Self {
            key: link.key.clone(),
            url: link.url.clone(),
            created: link.created_display(),
            link: short_url,
            count: link.visits(),
        }
    }
}
