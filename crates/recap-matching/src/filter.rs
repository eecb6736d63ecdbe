use std::collections::HashSet;

use recap_core::config::MatchingConfig;
use recap_core::models::{MatchResult, Neighbor};
use recap_core::traits::ISceneStore;
use tracing::debug;

/// Token statistics of a query, computed on lower-cased whitespace tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryQuality {
    pub tokens: usize,
    pub distinct: usize,
}

impl QueryQuality {
    pub fn of(query: &str) -> Self {
        let lowered = query.to_lowercase();
        let tokens: Vec<&str> = lowered.split_whitespace().collect();
        let distinct = tokens.iter().collect::<HashSet<_>>().len();
        Self {
            tokens: tokens.len(),
            distinct,
        }
    }
}

/// Distance and query-quality gates over raw index hits.
#[derive(Debug, Clone)]
pub struct MatchFilter {
    distance_threshold: f32,
    min_query_tokens: usize,
    min_distinct_tokens: usize,
}

impl MatchFilter {
    pub fn new(config: &MatchingConfig) -> Self {
        Self {
            distance_threshold: config.distance_threshold,
            min_query_tokens: config.min_query_tokens,
            min_distinct_tokens: config.min_distinct_tokens,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.distance_threshold
    }

    /// Whether a query carries enough signal for any hit to be trusted.
    pub fn query_is_informative(&self, query: &str) -> bool {
        let quality = QueryQuality::of(query);
        quality.tokens >= self.min_query_tokens && quality.distinct >= self.min_distinct_tokens
    }

    /// Hits that pass both gates, in their original order.
    ///
    /// `hits` come from the index ascending by distance; survivors keep that
    /// order. A hit exactly at the threshold is accepted.
    pub fn filter(&self, hits: &[Neighbor], query: &str) -> Vec<Neighbor> {
        if hits.is_empty() || !self.query_is_informative(query) {
            return Vec::new();
        }
        hits.iter()
            .filter(|n| n.distance <= self.distance_threshold)
            .copied()
            .collect()
    }

    /// [`filter`](Self::filter), then resolve survivors against the store.
    /// Ids missing from the store are dropped.
    pub fn accept<S: ISceneStore + ?Sized>(
        &self,
        hits: &[Neighbor],
        query: &str,
        store: &S,
    ) -> Vec<MatchResult> {
        self.filter(hits, query)
            .into_iter()
            .filter_map(|n| match store.get(n.id) {
                Some(scene) => Some(MatchResult {
                    scene: scene.clone(),
                    score: n.distance,
                }),
                None => {
                    debug!(scene_id = n.id, "accepted hit has no scene record");
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> MatchFilter {
        MatchFilter::new(&MatchingConfig::default())
    }

    fn hit(id: u64, distance: f32) -> Neighbor {
        Neighbor { id, distance }
    }

    const GOOD_QUERY: &str = "the detective finds a hidden letter";

    #[test]
    fn quality_counts_lowercased_tokens() {
        let q = QueryQuality::of("Yes yes YES no  maybe");
        assert_eq!(q.tokens, 5);
        assert_eq!(q.distinct, 3);
    }

    #[test]
    fn distance_gate_is_inclusive() {
        let kept = filter().filter(&[hit(1, 0.35), hit(2, 0.3501)], GOOD_QUERY);
        assert_eq!(kept, vec![hit(1, 0.35)]);
    }

    #[test]
    fn short_query_rejects_everything() {
        assert!(filter().filter(&[hit(1, 0.01)], "four words are here").is_empty());
    }

    #[test]
    fn repetitive_query_rejects_everything() {
        assert!(filter().filter(&[hit(1, 0.01)], "go go go Go away").is_empty());
    }

    #[test]
    fn survivors_keep_order() {
        let kept = filter().filter(&[hit(3, 0.1), hit(1, 0.5), hit(2, 0.2)], GOOD_QUERY);
        let ids: Vec<_> = kept.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn custom_threshold_is_respected() {
        let config = MatchingConfig {
            distance_threshold: 0.1,
            ..MatchingConfig::default()
        };
        let kept = MatchFilter::new(&config).filter(&[hit(1, 0.05), hit(2, 0.2)], GOOD_QUERY);
        assert_eq!(kept.len(), 1);
    }
}
