//! Build the production providers and the initial index from config.

use std::sync::Arc;

use recap_characters::ActorLookupChain;
use recap_core::config::{EmbeddingBackend, IndexConfig, ProviderConfig};
use recap_core::errors::{IndexError, RecapResult};
use recap_core::traits::{IActorLookup, ICompletionProvider, IEmbeddingProvider, IVectorIndex};
use recap_index::{SceneIndex, SnapshotStore};
use recap_providers::{
    CachedEmbedder, CompletionActorLookup, HashingEmbedder, OpenAiCompletion, OpenAiEmbedder,
    TmdbActorLookup,
};
use tracing::{info, warn};

/// The configured embedding backend behind the query cache.
pub fn build_embedder(config: &ProviderConfig) -> RecapResult<Arc<dyn IEmbeddingProvider>> {
    let inner: Arc<dyn IEmbeddingProvider> = match config.embedding_backend {
        EmbeddingBackend::OpenAi => Arc::new(OpenAiEmbedder::from_config(config)?),
        EmbeddingBackend::Hashing => Arc::new(HashingEmbedder::new(config.embedding_dimensions)),
    };
    info!(
        provider = inner.name(),
        dims = inner.dimensions(),
        "embedding provider ready"
    );
    Ok(Arc::new(CachedEmbedder::new(inner, config.embedding_cache_size)))
}

pub fn build_completion(config: &ProviderConfig) -> RecapResult<Arc<dyn ICompletionProvider>> {
    Ok(Arc::new(OpenAiCompletion::from_config(config)?))
}

/// TMDb first (when a key is configured), then the completion model.
pub fn build_actor_lookup(
    config: &ProviderConfig,
    completion: Arc<dyn ICompletionProvider>,
) -> Arc<dyn IActorLookup> {
    let mut chain = ActorLookupChain::new();
    match TmdbActorLookup::from_config(config) {
        Ok(tmdb) => chain.push(Box::new(tmdb)),
        Err(e) => warn!(error = %e, "TMDb lookup disabled"),
    }
    chain.push(Box::new(CompletionActorLookup::new(completion)));
    Arc::new(chain)
}

/// The persisted snapshot, or an empty index when none has been written yet.
/// A snapshot that exists but cannot be read, or whose vectors do not have
/// `dims` components, is an error.
pub fn load_or_empty_index(config: &IndexConfig, dims: usize) -> RecapResult<SceneIndex> {
    let snapshots = SnapshotStore::from_config(config);
    if !snapshots.exists() {
        info!(dir = %config.index_dir, "no index snapshot yet, starting empty");
        return Ok(SceneIndex::empty(dims));
    }
    let index = snapshots.load()?;
    if !index.is_empty() && index.index().dimensions() != dims {
        return Err(IndexError::DimensionMismatch {
            expected: index.index().dimensions(),
            actual: dims,
        }
        .into());
    }
    info!(scenes = index.len(), dims, "index snapshot loaded");
    Ok(index)
}
