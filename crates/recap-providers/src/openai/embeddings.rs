use recap_core::config::ProviderConfig;
use recap_core::errors::{EmbeddingError, RecapResult};
use recap_core::traits::IEmbeddingProvider;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::http::{build_client, with_retries, DEFAULT_MAX_RETRIES};

/// Embedding client for any OpenAI-compatible `/embeddings` API.
pub struct OpenAiEmbedder {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
    dimensions: usize,
    max_retries: u32,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Deserialize)]
struct EmbedResponse {
    data: Vec<EmbedData>,
}

#[derive(Deserialize)]
struct EmbedData {
    #[serde(default)]
    index: Option<usize>,
    embedding: Vec<f32>,
}

impl OpenAiEmbedder {
    pub fn new(config: &ProviderConfig, api_key: String) -> RecapResult<Self> {
        let client = build_client(config).map_err(|e| EmbeddingError::InferenceFailed {
            reason: format!("client setup: {e}"),
        })?;
        Ok(Self {
            client,
            endpoint: super::endpoint(&config.openai_base_url, "embeddings"),
            model: config.embedding_model.clone(),
            api_key,
            dimensions: config.embedding_dimensions,
            max_retries: DEFAULT_MAX_RETRIES,
        })
    }

    pub fn from_config(config: &ProviderConfig) -> RecapResult<Self> {
        Self::new(config, config.openai_api_key()?)
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    fn send(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&EmbedRequest {
                model: &self.model,
                input: texts,
            })
            .send()
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("HTTP error: {e}"),
            })?;

        let status = response.status();
        let text = response.text().map_err(|e| EmbeddingError::InferenceFailed {
            reason: format!("reading body: {e}"),
        })?;
        if !status.is_success() {
            return Err(EmbeddingError::InferenceFailed {
                reason: format!("API returned {status}: {text}"),
            });
        }
        parse_embedding_response(&text, texts.len(), self.dimensions)
    }

    fn request(&self, texts: &[String]) -> RecapResult<Vec<Vec<f32>>> {
        with_retries(
            self.max_retries,
            |e| matches!(e, EmbeddingError::InferenceFailed { .. }),
            || self.send(texts),
        )
        .map_err(|e| {
            warn!(model = %self.model, error = %e, "embedding request failed");
            e.into()
        })
    }
}

/// Decode an embeddings body: `expected` vectors, each of `dims` floats,
/// reordered by their `index` field when present.
pub fn parse_embedding_response(
    body: &str,
    expected: usize,
    dims: usize,
) -> Result<Vec<Vec<f32>>, EmbeddingError> {
    let mut parsed: EmbedResponse =
        serde_json::from_str(body).map_err(|e| EmbeddingError::InferenceFailed {
            reason: format!("JSON parse error: {e}"),
        })?;
    if parsed.data.len() != expected {
        return Err(EmbeddingError::InferenceFailed {
            reason: format!("expected {expected} embeddings, got {}", parsed.data.len()),
        });
    }
    parsed.data.sort_by_key(|d| d.index.unwrap_or(usize::MAX));
    parsed
        .data
        .into_iter()
        .map(|d| {
            if d.embedding.len() != dims {
                return Err(EmbeddingError::DimensionMismatch {
                    expected: dims,
                    actual: d.embedding.len(),
                });
            }
            Ok(d.embedding)
        })
        .collect()
}

impl IEmbeddingProvider for OpenAiEmbedder {
    fn embed(&self, text: &str) -> RecapResult<Vec<f32>> {
        if text.trim().is_empty() {
            return Err(EmbeddingError::EmptyInput.into());
        }
        let mut vectors = self.request(&[text.to_string()])?;
        vectors.pop().ok_or_else(|| {
            EmbeddingError::InferenceFailed {
                reason: "no embedding returned".to_string(),
            }
            .into()
        })
    }

    fn embed_batch(&self, texts: &[String]) -> RecapResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        if texts.iter().any(|t| t.trim().is_empty()) {
            return Err(EmbeddingError::EmptyInput.into());
        }
        self.request(texts)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "openai-embeddings"
    }
}
