use proptest::prelude::*;
use recap_core::config::{EmbeddingBackend, RecapConfig};

fn backend() -> impl Strategy<Value = EmbeddingBackend> {
    prop_oneof![Just(EmbeddingBackend::OpenAi), Just(EmbeddingBackend::Hashing)]
}

proptest! {
    #[test]
    fn valid_configs_survive_toml(
        chunk_size in 1usize..64,
        threshold in 0.0f32..4.0,
        token_budget in 0usize..100_000,
        lines_per_scene in 1usize..32,
        dims in 1usize..4096,
        backend in backend(),
        language in "[a-z]{2}",
    ) {
        let mut config = RecapConfig::default();
        config.summary.chunk_size = chunk_size;
        config.summary.token_budget = token_budget;
        config.summary.default_language = language.clone();
        config.matching.distance_threshold = threshold;
        config.index.lines_per_scene = lines_per_scene;
        config.providers.embedding_dimensions = dims;
        config.providers.embedding_backend = backend;

        let back = RecapConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        prop_assert_eq!(back.summary.chunk_size, chunk_size);
        prop_assert_eq!(back.summary.token_budget, token_budget);
        prop_assert_eq!(back.summary.default_language, language);
        prop_assert_eq!(back.matching.distance_threshold, threshold);
        prop_assert_eq!(back.index.lines_per_scene, lines_per_scene);
        prop_assert_eq!(back.providers.embedding_dimensions, dims);
        prop_assert_eq!(back.providers.embedding_backend, backend);
    }

    #[test]
    fn zero_chunk_size_never_validates(threshold in 0.0f32..4.0) {
        let mut config = RecapConfig::default();
        config.summary.chunk_size = 0;
        config.matching.distance_threshold = threshold;
        prop_assert!(config.validate().is_err());
    }
}
