use proptest::prelude::*;
use recap_core::traits::IEmbeddingProvider;
use recap_providers::HashingEmbedder;

proptest! {
    #[test]
    fn vectors_have_fixed_dimension(text in "[a-z ]{1,80}", dims in 1usize..300) {
        prop_assume!(!text.trim().is_empty());
        let v = HashingEmbedder::new(dims).embed(&text).unwrap();
        prop_assert_eq!(v.len(), dims);
    }

    #[test]
    fn embedding_is_deterministic(text in "[a-zA-Z0-9 ,.!?]{1,120}") {
        prop_assume!(!text.trim().is_empty());
        let e = HashingEmbedder::new(128);
        prop_assert_eq!(e.embed(&text).unwrap(), e.embed(&text).unwrap());
    }

    #[test]
    fn norm_is_zero_or_one(text in "[a-z ]{1,80}") {
        prop_assume!(!text.trim().is_empty());
        let v = HashingEmbedder::new(64).embed(&text).unwrap();
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        prop_assert!(norm == 0.0 || (norm - 1.0).abs() < 1e-4);
    }
}
