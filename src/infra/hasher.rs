//! Keyed password digest worker.

use async_trait::async_trait;
use sha2::{Digest, Sha512};

use crate::errors::{AppError, AppResult};
use crate::services::PasswordHasher;

/// Deterministic iterated SHA-512 digest keyed with process secret material.
///
/// Determinism is required by the credential store contract: login looks a
/// user up by `(email, digest)` in a single call, so the same input, key and
/// iteration count must always produce the same digest.
pub struct KeyedHasher;

#[async_trait]
impl PasswordHasher for KeyedHasher {
    async fn hash(&self, text: &str, key: &str, iterations: u32) -> AppResult<String> {
        let text = text.to_owned();
        let key = key.to_owned();

        // CPU-bound work leaves the request-handling threads.
        tokio::task::spawn_blocking(move || derive_digest(&text, &key, iterations))
            .await
            .map_err(|e| AppError::internal(format!("hashing task failed: {e}")))
    }
}

fn derive_digest(text: &str, key: &str, iterations: u32) -> String {
    let mut digest = Sha512::new()
        .chain_update(key.as_bytes())
        .chain_update(text.as_bytes())
        .finalize();

    for _ in 1..iterations.max(1) {
        digest = Sha512::new()
            .chain_update(key.as_bytes())
            .chain_update(digest)
            .finalize();
    }

    hex::encode(digest)
}
