//! Offline embedder based on signed feature hashing.
//!
//! Subtitle lines are short, so unigrams alone collide badly; adjacent word
//! pairs are hashed in too. Used when no embedding API is configured and in
//! local test runs.

use std::collections::HashMap;

use recap_core::errors::{EmbeddingError, RecapResult};
use recap_core::traits::IEmbeddingProvider;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Deterministic, dependency-free embedder.
#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    dimensions: usize,
}

impl HashingEmbedder {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    fn fnv1a(feature: &str) -> u64 {
        feature.bytes().fold(FNV_OFFSET, |h, b| {
            (h ^ u64::from(b)).wrapping_mul(FNV_PRIME)
        })
    }

    /// Lowercased alphanumeric words of at least two characters.
    pub fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric() && c != '\'')
            .map(|s| s.trim_matches('\''))
            .filter(|s| s.chars().count() >= 2)
            .map(str::to_lowercase)
            .collect()
    }

    fn features(tokens: &[String]) -> HashMap<String, f32> {
        let mut counts: HashMap<String, f32> = HashMap::new();
        for tok in tokens {
            *counts.entry(tok.clone()).or_default() += 1.0;
        }
        for pair in tokens.windows(2) {
            *counts.entry(format!("{} {}", pair[0], pair[1])).or_default() += 0.5;
        }
        counts
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let tokens = Self::tokenize(text);
        let mut vec = vec![0.0f32; self.dimensions];
        if tokens.is_empty() {
            return vec;
        }
        let total = tokens.len() as f32;
        for (feature, count) in Self::features(&tokens) {
            let h = Self::fnv1a(&feature);
            let bucket = (h % self.dimensions as u64) as usize;
            // Top bit picks the sign so collisions tend to cancel.
            let sign = if h >> 63 == 0 { 1.0 } else { -1.0 };
            let weight = 1.0 + (feature.len() as f32).ln();
            vec[bucket] += sign * weight * count / total;
        }

        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            vec.iter_mut().for_each(|v| *v /= norm);
        }
        vec
    }
}

impl IEmbeddingProvider for HashingEmbedder {
    fn embed(&self, text: &str) -> RecapResult<Vec<f32>> {
        if text.trim().is_empty() {
            return Err(EmbeddingError::EmptyInput.into());
        }
        Ok(self.vectorize(text))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashing"
    }
}
