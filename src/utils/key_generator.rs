//! Short key generation.
//!
//! Keys are drawn from the ASCII letters. The alphabet is repeated `length`
//! times and `length` positions are sampled without replacement, so a letter
//! can show up at most `length` times in one key. Nothing here checks for
//! collisions; the primary key of `links` is the only guard.

use crate::error::AppError;
use rand::seq::IndexedRandom;
use serde_json::json;

/// Letters a key may contain.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Key length used when nothing is configured.
pub const DEFAULT_KEY_LENGTH: usize = 5;

/// Widest key the `links.key` column holds.
pub const MAX_KEY_LENGTH: usize = 8;

/// Generates random fixed-length letter keys.
#[derive(Debug, Clone)]
pub struct KeyGenerator {
    length: usize,
    pool: Vec<u8>,
}

impl KeyGenerator {
    /// Creates a generator for keys of `length` letters.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] unless `1 <= length <= 8`.
    pub fn new(length: usize) -> Result<Self, AppError> {
        if length == 0 || length > MAX_KEY_LENGTH {
            return Err(AppError::bad_request(
                "Key length must be between 1 and 8",
                json!({ "length": length }),
            ));
        }

        Ok(Self {
            length,
            pool: ALPHABET.repeat(length),
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Produces a new key.
    pub fn generate(&self) -> String {
        let mut rng = rand::rng();
        self.pool
            .choose_multiple(&mut rng, self.length)
            .map(|&b| b as char)
            .collect()
    }
}

impl Default for KeyGenerator {
    fn default() -> Self {
        Self {
            length: DEFAULT_KEY_LENGTH,
            pool: ALPHABET.repeat(DEFAULT_KEY_LENGTH),
        }
    }
}

/// Returns true if `key` could have been produced by a generator of any length.
pub fn is_well_formed(key: &str) -> bool {
    !key.is_empty() && key.len() <= MAX_KEY_LENGTH && key.bytes().all(|b| b.is_ascii_alphabetic())
}
