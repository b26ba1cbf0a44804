//! Content hashing of submitted URLs for deduplication.

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of the URL exactly as submitted.
///
/// The URL is not normalized first: `http://a.com` and `http://a.com/` hash
/// differently and get different keys.
pub fn url_hash(url: &str) -> String {
    hex::encode(Sha256::digest(url.as_bytes()))
}
