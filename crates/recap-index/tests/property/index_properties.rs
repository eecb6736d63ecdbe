use proptest::prelude::*;
use recap_core::traits::IVectorIndex;
use recap_index::FlatL2Index;

fn rows() -> impl Strategy<Value = Vec<Vec<f32>>> {
    prop::collection::vec(prop::collection::vec(-10.0f32..10.0, 3), 0..40)
}

proptest! {
    #[test]
    fn search_is_sorted_and_bounded(data in rows(), query in prop::collection::vec(-10.0f32..10.0, 3), k in 0usize..50) {
        let mut index = FlatL2Index::new(3);
        for (i, row) in data.iter().enumerate() {
            index.add(i as u64, row).unwrap();
        }
        let hits = index.search(&query, k).unwrap();

        prop_assert_eq!(hits.len(), k.min(data.len()));
        for pair in hits.windows(2) {
            prop_assert!(pair[0].distance <= pair[1].distance);
        }
    }

    #[test]
    fn nearest_hit_is_global_minimum(data in rows(), query in prop::collection::vec(-10.0f32..10.0, 3)) {
        prop_assume!(!data.is_empty());
        let mut index = FlatL2Index::new(3);
        for (i, row) in data.iter().enumerate() {
            index.add(i as u64, row).unwrap();
        }
        let best = index.search(&query, 1).unwrap()[0];
        let min = data
            .iter()
            .map(|r| r.iter().zip(&query).map(|(a, b)| (a - b) * (a - b)).sum::<f32>())
            .fold(f32::INFINITY, f32::min);
        prop_assert_eq!(best.distance, min);
    }
}
