use recap_core::config::ObservabilityConfig;
use recap_core::models::Checkpoint;
use recap_observability::{events, init_tracing, init_tracing_with_filter};

#[test]
fn init_is_idempotent() {
    let config = ObservabilityConfig::default();
    init_tracing(&config);
    init_tracing(&config);
    init_tracing_with_filter("debug");
}

#[test]
fn spans_and_events_can_be_emitted() {
    init_tracing_with_filter("trace");
    let span = recap_observability::summary_span!("req-1", "Heist", 12usize);
    let _guard = span.enter();
    events::scene_matched("req-1", 4, "Heist", 0.12);
    events::no_match("req-1", 5, "query too short");
    events::stage_cancelled("req-1", Checkpoint::BeforeCombine);
    events::provider_failure_skipped("req-1", "scene", 2, "timeout");
    events::budget_exhausted("req-1", 7, 15_200, 15_000);
    events::sentinel_returned("req-1", "nothing summarized");
    let _m = recap_observability::match_span!("req-1", 42usize).entered();
    let _e = recap_observability::extraction_span!("req-1", "Heist").entered();
    let _c = recap_observability::chunk_span!("req-1", 3usize).entered();
    let _i = recap_observability::index_build_span!(2usize).entered();
}
