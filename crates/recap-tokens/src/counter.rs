use std::sync::Arc;

use moka::sync::Cache;
use recap_core::config::defaults;
use recap_core::errors::{RecapError, RecapResult};
use tiktoken_rs::CoreBPE;
use tracing::debug;

/// Token counter wrapping the tiktoken encoding of a chat model.
/// Caches results per blake3 content hash.
#[derive(Clone)]
pub struct TokenCounter {
    bpe: Arc<CoreBPE>,
    model: String,
    cache: Cache<String, usize>,
}

impl TokenCounter {
    /// Counter using the encoding of `model` (e.g. `gpt-3.5-turbo`).
    pub fn for_model(model: &str, cache_capacity: u64) -> RecapResult<Self> {
        let bpe = tiktoken_rs::get_bpe_from_model(model).map_err(|e| {
            RecapError::TokenizerUnavailable {
                reason: format!("{model}: {e}"),
            }
        })?;
        debug!(model, "token counter initialized");
        Ok(Self {
            bpe: Arc::new(bpe),
            model: model.to_string(),
            cache: Cache::new(cache_capacity),
        })
    }

    /// Counter for the default summarization model.
    pub fn new() -> RecapResult<Self> {
        Self::for_model(
            defaults::DEFAULT_TOKENIZER_MODEL,
            defaults::DEFAULT_TOKEN_CACHE_CAPACITY,
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Count tokens in the given text (uncached).
    pub fn count(&self, text: &str) -> usize {
        self.bpe.encode_ordinary(text).len()
    }

    /// Count tokens with blake3 content-hash caching.
    pub fn count_cached(&self, text: &str) -> usize {
        let hash = blake3::hash(text.as_bytes()).to_hex().to_string();
        self.cache.get_with(hash, || self.count(text))
    }
}

impl std::fmt::Debug for TokenCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCounter")
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}
