use proptest::prelude::*;
use recap_core::config::SummaryConfig;
use recap_core::traits::NeverCancelled;
use recap_summary::{ChunkSummarizer, IncrementalSummarizer, SummarizationSession};
use recap_tokens::TokenCounter;
use test_fixtures::ScriptedCompletion;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn chunk_count_matches_processed_scenes(
        scene_count in 0usize..25,
        chunk_size in 1usize..8,
        budget in 0usize..3_000,
    ) {
        let counter = TokenCounter::new().unwrap();
        let config = SummaryConfig { token_budget: budget, chunk_size, ..SummaryConfig::default() };
        let completion = ScriptedCompletion::echo();
        let scenes = (0..scene_count).map(|i| format!("scene {i} where something happens")).collect();
        let mut session = SummarizationSession::new("r", "M", "en", scenes);

        let out = IncrementalSummarizer::new(&completion, &counter, &config)
            .summarize(&mut session, &NeverCancelled)
            .unwrap()
            .completed()
            .unwrap();
        let chunks = ChunkSummarizer::new(&completion, &config)
            .summarize_chunks(&mut session, &NeverCancelled)
            .unwrap()
            .completed()
            .unwrap();

        let processed = out.budget.scenes_processed;
        prop_assert!(processed <= scene_count);
        prop_assert!(out.budget.peak_projected_tokens <= budget);
        prop_assert_eq!(chunks.len(), processed.div_ceil(chunk_size));
    }
}
