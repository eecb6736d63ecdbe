use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use recap_core::errors::{EmbeddingError, RecapResult};
use recap_core::traits::IEmbeddingProvider;

/// Embedder returning fixed vectors for known texts and a deterministic
/// byte-derived vector for anything else.
pub struct StubEmbedder {
    dims: usize,
    known: HashMap<String, Vec<f32>>,
    failing: Vec<String>,
    calls: AtomicUsize,
}

impl StubEmbedder {
    pub fn new(dims: usize) -> Self {
        Self {
            dims,
            known: HashMap::new(),
            failing: Vec::new(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Return `vector` whenever `text` is embedded.
    pub fn with(mut self, text: impl Into<String>, vector: Vec<f32>) -> Self {
        assert_eq!(vector.len(), self.dims, "stub vector has wrong dimension");
        self.known.insert(text.into(), vector);
        self
    }

    /// Fail any text containing `needle`.
    pub fn failing_on(mut self, needle: impl Into<String>) -> Self {
        self.failing.push(needle.into());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IEmbeddingProvider for StubEmbedder {
    fn embed(&self, text: &str) -> RecapResult<Vec<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if text.trim().is_empty() {
            return Err(EmbeddingError::EmptyInput.into());
        }
        if self.failing.iter().any(|n| text.contains(n.as_str())) {
            return Err(EmbeddingError::InferenceFailed {
                reason: "stub failure".to_string(),
            }
            .into());
        }
        if let Some(v) = self.known.get(text) {
            return Ok(v.clone());
        }
        let mut v = vec![0.0f32; self.dims];
        for (i, b) in text.bytes().enumerate() {
            v[i % self.dims] += f32::from(b) / 255.0;
        }
        Ok(v)
    }

    fn dimensions(&self) -> usize {
        self.dims
    }

    fn name(&self) -> &str {
        "stub"
    }
}
