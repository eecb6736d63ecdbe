pub mod defaults;

mod character_config;
mod index_config;
mod matching_config;
mod observability_config;
mod provider_config;
mod session_config;
mod summary_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, RecapResult};

pub use character_config::CharacterConfig;
pub use index_config::IndexConfig;
pub use matching_config::MatchingConfig;
pub use observability_config::ObservabilityConfig;
pub use provider_config::{EmbeddingBackend, ProviderConfig};
pub use session_config::SessionConfig;
pub use summary_config::SummaryConfig;

/// Top-level configuration. Every section falls back to its defaults, so an
/// empty TOML document is a valid config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecapConfig {
    pub matching: MatchingConfig,
    pub summary: SummaryConfig,
    pub characters: CharacterConfig,
    pub providers: ProviderConfig,
    pub index: IndexConfig,
    pub session: SessionConfig,
    pub observability: ObservabilityConfig,
}

impl RecapConfig {
    /// Parse a config from a TOML string.
    pub fn from_toml(toml_str: &str) -> RecapResult<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> RecapResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&raw)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> RecapResult<String> {
        let raw = toml::to_string(self).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })?;
        Ok(raw)
    }

    /// Reject values the pipeline cannot run with.
    pub fn validate(&self) -> RecapResult<()> {
        if self.summary.chunk_size == 0 {
            return Err(invalid("summary.chunk_size", "must be at least 1"));
        }
        if !self.matching.distance_threshold.is_finite() || self.matching.distance_threshold < 0.0
        {
            return Err(invalid(
                "matching.distance_threshold",
                "must be a finite, non-negative distance",
            ));
        }
        if self.providers.embedding_dimensions == 0 {
            return Err(invalid("providers.embedding_dimensions", "must be at least 1"));
        }
        if self.index.lines_per_scene == 0 {
            return Err(invalid("index.lines_per_scene", "must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> crate::errors::RecapError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
    .into()
}
