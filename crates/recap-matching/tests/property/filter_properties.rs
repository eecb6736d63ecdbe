use proptest::prelude::*;
use recap_core::config::MatchingConfig;
use recap_core::models::Neighbor;
use recap_matching::{MatchFilter, QueryQuality};

fn sorted_hits() -> impl Strategy<Value = Vec<Neighbor>> {
    prop::collection::vec(0.0f32..2.0, 0..20).prop_map(|mut d| {
        d.sort_by(f32::total_cmp);
        d.into_iter()
            .enumerate()
            .map(|(i, distance)| Neighbor { id: i as u64, distance })
            .collect()
    })
}

proptest! {
    #[test]
    fn survivors_are_an_ordered_subsequence_within_threshold(
        hits in sorted_hits(),
        threshold in 0.0f32..2.0,
        words in prop::collection::vec("[a-z]{1,6}", 0..10),
    ) {
        let config = MatchingConfig { distance_threshold: threshold, ..MatchingConfig::default() };
        let filter = MatchFilter::new(&config);
        let query = words.join(" ");
        let kept = filter.filter(&hits, &query);

        let quality = QueryQuality::of(&query);
        if quality.tokens < 5 || quality.distinct < 4 {
            prop_assert!(kept.is_empty());
        }
        prop_assert!(kept.iter().all(|n| n.distance <= threshold));
        for pair in kept.windows(2) {
            prop_assert!(pair[0].id < pair[1].id);
            prop_assert!(pair[0].distance <= pair[1].distance);
        }
        if filter.query_is_informative(&query) {
            let expected = hits.iter().filter(|n| n.distance <= threshold).count();
            prop_assert_eq!(kept.len(), expected);
        }
    }
}
