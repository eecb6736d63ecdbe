use serde::{Deserialize, Serialize};

use super::defaults;

/// Incremental and chunk summarization configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Token budget for prompt + running context + intro per scene.
    pub token_budget: usize,
    /// Scenes per UI chunk summary.
    pub chunk_size: usize,
    pub scene_temperature: f32,
    pub combine_temperature: f32,
    pub chunk_temperature: f32,
    /// Language tag used when a request does not specify one.
    pub default_language: String,
    /// Model whose tokenizer is used for budget accounting.
    pub tokenizer_model: String,
    pub token_cache_capacity: u64,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            token_budget: defaults::DEFAULT_TOKEN_BUDGET,
            chunk_size: defaults::DEFAULT_CHUNK_SIZE,
            scene_temperature: defaults::DEFAULT_SCENE_TEMPERATURE,
            combine_temperature: defaults::DEFAULT_COMBINE_TEMPERATURE,
            chunk_temperature: defaults::DEFAULT_CHUNK_TEMPERATURE,
            default_language: defaults::DEFAULT_LANGUAGE.to_string(),
            tokenizer_model: defaults::DEFAULT_TOKENIZER_MODEL.to_string(),
            token_cache_capacity: defaults::DEFAULT_TOKEN_CACHE_CAPACITY,
        }
    }
}
