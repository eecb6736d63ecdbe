use recap_core::config::MatchingConfig;
use recap_core::errors::RecapResult;
use recap_core::models::Neighbor;
use recap_core::traits::IVectorIndex;
use recap_core::RecapError;
use recap_index::{FlatL2Index, InMemorySceneStore};
use recap_matching::SceneMatcher;
use test_fixtures::{scene, StubEmbedder};

/// Index that always answers with the same hits.
struct FixedIndex(Vec<Neighbor>);

impl IVectorIndex for FixedIndex {
    fn search(&self, _query: &[f32], k: usize) -> RecapResult<Vec<Neighbor>> {
        Ok(self.0.iter().take(k).copied().collect())
    }

    fn dimensions(&self) -> usize {
        2
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

fn store() -> InMemorySceneStore {
    InMemorySceneStore::from_records(vec![
        scene(42, "Noir", "00:12:00,000", "He opens the letter from the drawer."),
        scene(43, "Noir", "00:13:00,000", "Rain on the window."),
    ])
    .unwrap()
}

#[test]
fn detective_query_at_close_distance_is_accepted() {
    let embedder = StubEmbedder::new(2);
    let index = FixedIndex(vec![Neighbor { id: 42, distance: 0.20 }]);
    let store = store();
    let matcher = SceneMatcher::new(&embedder, &index, &store, &MatchingConfig::default());

    let best = matcher
        .best_match("r1", "the detective finds a hidden letter in the drawer")
        .unwrap()
        .expect("match expected");
    assert_eq!(best.scene.id, 42);
    assert_eq!(best.scene.movie, "Noir");
    assert_eq!(best.score, 0.20);
}

#[test]
fn single_word_query_never_matches_and_skips_embedding() {
    let embedder = StubEmbedder::new(2);
    let index = FixedIndex(vec![Neighbor { id: 42, distance: 0.20 }]);
    let store = store();
    let matcher = SceneMatcher::new(&embedder, &index, &store, &MatchingConfig::default());

    assert!(matcher.find_matches("r1", "yes").unwrap().is_empty());
    assert_eq!(embedder.call_count(), 0);
}

#[test]
fn blank_query_is_an_input_error() {
    let embedder = StubEmbedder::new(2);
    let index = FixedIndex(Vec::new());
    let store = store();
    let matcher = SceneMatcher::new(&embedder, &index, &store, &MatchingConfig::default());

    let err = matcher.find_matches("r1", "   ").unwrap_err();
    assert!(matches!(err, RecapError::InvalidInput { .. }));
}

#[test]
fn far_hits_yield_no_match() {
    let embedder = StubEmbedder::new(2);
    let index = FixedIndex(vec![
        Neighbor { id: 42, distance: 0.9 },
        Neighbor { id: 43, distance: 1.4 },
    ]);
    let store = store();
    let matcher = SceneMatcher::new(&embedder, &index, &store, &MatchingConfig::default());
    assert!(matcher
        .find_matches("r1", "the detective finds a hidden letter")
        .unwrap()
        .is_empty());
}

#[test]
fn zero_top_k_yields_no_match() {
    let embedder = StubEmbedder::new(2);
    let index = FixedIndex(vec![Neighbor { id: 42, distance: 0.1 }]);
    let store = store();
    let config = MatchingConfig {
        top_k: 0,
        ..MatchingConfig::default()
    };
    let matcher = SceneMatcher::new(&embedder, &index, &store, &config);
    assert!(matcher
        .find_matches("r1", "the detective finds a hidden letter")
        .unwrap()
        .is_empty());
}

#[test]
fn works_against_flat_index_end_to_end() {
    let query = "rain keeps falling on the old window";
    let embedder = StubEmbedder::new(3)
        .with(query, vec![1.0, 0.0, 0.0])
        .with("unrelated", vec![0.0, 5.0, 0.0]);
    let mut index = FlatL2Index::new(3);
    index.add(43, &[1.0, 0.25, 0.0]).unwrap();
    index.add(42, &[0.0, 5.0, 0.0]).unwrap();
    let store = store();
    let matcher = SceneMatcher::new(&embedder, &index, &store, &MatchingConfig::default());

    let matches = matcher.find_matches("r2", query).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].scene.id, 43);
    assert_eq!(matches[0].score, 0.0625);
}

#[test]
fn embedding_failure_propagates() {
    let embedder = StubEmbedder::new(2).failing_on("letter");
    let index = FixedIndex(vec![Neighbor { id: 42, distance: 0.1 }]);
    let store = store();
    let matcher = SceneMatcher::new(&embedder, &index, &store, &MatchingConfig::default());
    let err = matcher
        .find_matches("r1", "the detective finds a hidden letter")
        .unwrap_err();
    assert!(err.is_provider_failure());
}
