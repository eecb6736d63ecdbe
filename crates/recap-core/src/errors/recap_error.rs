use super::{ActorLookupError, CompletionError, ConfigError, EmbeddingError, IndexError};

/// Umbrella error for the whole workspace.
#[derive(Debug, thiserror::Error)]
pub enum RecapError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("embedding error: {0}")]
    EmbeddingError(#[from] EmbeddingError),

    #[error("completion error: {0}")]
    CompletionError(#[from] CompletionError),

    #[error("index error: {0}")]
    IndexError(#[from] IndexError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("actor lookup error: {0}")]
    ActorLookupError(#[from] ActorLookupError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("tokenizer unavailable: {reason}")]
    TokenizerUnavailable { reason: String },
}

impl RecapError {
    /// Shorthand for an input validation failure.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Whether this failure came from an external provider call and is worth
    /// skipping rather than aborting on.
    pub fn is_provider_failure(&self) -> bool {
        matches!(
            self,
            Self::EmbeddingError(_) | Self::CompletionError(_) | Self::ActorLookupError(_)
        )
    }
}

pub type RecapResult<T> = Result<T, RecapError>;
