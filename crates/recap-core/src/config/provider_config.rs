use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{ConfigError, RecapResult};

/// Which embedder backs matching and index builds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingBackend {
    /// OpenAI-compatible `/embeddings` endpoint.
    #[default]
    OpenAi,
    /// Local feature hashing. No network, no API key; vectors are not
    /// comparable with `openai` ones.
    Hashing,
}

/// External provider configuration. API keys are read from the environment
/// variables named here and never stored in the config itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub embedding_backend: EmbeddingBackend,
    pub openai_base_url: String,
    pub chat_model: String,
    pub embedding_model: String,
    pub embedding_dimensions: usize,
    pub openai_api_key_env: String,
    pub tmdb_base_url: String,
    pub tmdb_api_key_env: String,
    /// Upper bound on a single provider call, connect included.
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub embedding_cache_size: u64,
}

impl ProviderConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Resolve the OpenAI-compatible API key from the environment.
    pub fn openai_api_key(&self) -> RecapResult<String> {
        read_env(&self.openai_api_key_env)
    }

    /// Resolve the TMDb API key from the environment.
    pub fn tmdb_api_key(&self) -> RecapResult<String> {
        read_env(&self.tmdb_api_key_env)
    }
}

fn read_env(var: &str) -> RecapResult<String> {
    match std::env::var(var) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::MissingApiKey {
            var: var.to_string(),
        }
        .into()),
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            embedding_backend: EmbeddingBackend::default(),
            openai_base_url: defaults::DEFAULT_OPENAI_BASE_URL.to_string(),
            chat_model: defaults::DEFAULT_CHAT_MODEL.to_string(),
            embedding_model: defaults::DEFAULT_EMBEDDING_MODEL.to_string(),
            embedding_dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            openai_api_key_env: defaults::DEFAULT_OPENAI_API_KEY_ENV.to_string(),
            tmdb_base_url: defaults::DEFAULT_TMDB_BASE_URL.to_string(),
            tmdb_api_key_env: defaults::DEFAULT_TMDB_API_KEY_ENV.to_string(),
            request_timeout_secs: defaults::DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: defaults::DEFAULT_CONNECT_TIMEOUT_SECS,
            embedding_cache_size: defaults::DEFAULT_EMBEDDING_CACHE_SIZE,
        }
    }
}
