use serde::{Deserialize, Serialize};

use super::defaults;

/// Scene matching configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Hits farther than this distance are rejected.
    pub distance_threshold: f32,
    /// Neighbours requested from the vector index per query.
    pub top_k: usize,
    /// Queries with fewer whitespace tokens never match.
    pub min_query_tokens: usize,
    /// Queries with fewer distinct tokens never match.
    pub min_distinct_tokens: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            distance_threshold: defaults::DEFAULT_DISTANCE_THRESHOLD,
            top_k: defaults::DEFAULT_TOP_K,
            min_query_tokens: defaults::DEFAULT_MIN_QUERY_TOKENS,
            min_distinct_tokens: defaults::DEFAULT_MIN_DISTINCT_TOKENS,
        }
    }
}
