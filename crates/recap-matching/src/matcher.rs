use recap_core::config::MatchingConfig;
use recap_core::errors::{RecapError, RecapResult};
use recap_core::models::MatchResult;
use recap_core::traits::{IEmbeddingProvider, ISceneStore, IVectorIndex};
use recap_observability::events;
use tracing::debug;

use crate::filter::MatchFilter;

/// Finds the scenes a query text refers to.
pub struct SceneMatcher<'a> {
    embedder: &'a dyn IEmbeddingProvider,
    index: &'a dyn IVectorIndex,
    store: &'a dyn ISceneStore,
    filter: MatchFilter,
    top_k: usize,
}

impl<'a> SceneMatcher<'a> {
    pub fn new(
        embedder: &'a dyn IEmbeddingProvider,
        index: &'a dyn IVectorIndex,
        store: &'a dyn ISceneStore,
        config: &MatchingConfig,
    ) -> Self {
        Self {
            embedder,
            index,
            store,
            filter: MatchFilter::new(config),
            top_k: config.top_k,
        }
    }

    /// Accepted matches, best first. Empty means "no match", which is not an
    /// error. A blank query is an input error.
    pub fn find_matches(&self, request_id: &str, query: &str) -> RecapResult<Vec<MatchResult>> {
        let span = recap_observability::match_span!(request_id, query.len());
        let _guard = span.enter();

        if query.trim().is_empty() {
            return Err(RecapError::invalid_input("query text is empty"));
        }
        // Skip the embedding call for queries the filter would reject anyway.
        if !self.filter.query_is_informative(query) {
            events::no_match(request_id, 0, "query too short or repetitive");
            return Ok(Vec::new());
        }

        let vector = self.embedder.embed(query)?;
        let hits = self.index.search(&vector, self.top_k)?;
        debug!(
            candidates = hits.len(),
            nearest = hits.first().map(|n| n.distance),
            threshold = self.filter.threshold(),
            "index searched"
        );

        let accepted = self.filter.accept(&hits, query, self.store);
        match accepted.first() {
            Some(best) => {
                events::scene_matched(request_id, best.scene.id, &best.scene.movie, best.score)
            }
            None => events::no_match(request_id, hits.len(), "no hit within distance threshold"),
        }
        Ok(accepted)
    }

    /// The single best match, if any.
    pub fn best_match(&self, request_id: &str, query: &str) -> RecapResult<Option<MatchResult>> {
        Ok(self.find_matches(request_id, query)?.into_iter().next())
    }
}
