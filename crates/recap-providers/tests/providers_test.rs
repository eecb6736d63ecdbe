//! Provider behaviour that can be exercised without the network.

use std::sync::Arc;

use recap_core::config::ProviderConfig;
use recap_core::errors::{ActorLookupError, CompletionError, RecapError};
use recap_core::traits::{IActorLookup, ICompletionProvider, IEmbeddingProvider};
use recap_providers::{CachedEmbedder, CompletionActorLookup, HashingEmbedder, OpenAiCompletion};
use test_fixtures::{ScriptedCompletion, StubEmbedder};

#[test]
fn cache_skips_provider_on_repeat() {
    let stub = Arc::new(StubEmbedder::new(4));
    let cached = CachedEmbedder::new(stub.clone(), 100);

    let first = cached.embed("where is the letter").unwrap();
    let second = cached.embed("where is the letter").unwrap();
    assert_eq!(first, second);
    assert_eq!(stub.call_count(), 1);

    cached.embed("something else").unwrap();
    assert_eq!(stub.call_count(), 2);
    assert_eq!(cached.dimensions(), 4);
}

#[test]
fn cache_batch_embeds_only_misses() {
    let stub = Arc::new(StubEmbedder::new(4));
    let cached = CachedEmbedder::new(stub.clone(), 100);
    cached.embed("alpha line").unwrap();

    let texts = vec!["alpha line".to_string(), "beta line".to_string(), "gamma line".to_string()];
    let vectors = cached.embed_batch(&texts).unwrap();
    assert_eq!(vectors.len(), 3);
    assert_eq!(stub.call_count(), 3);
    assert_eq!(vectors[0], cached.embed("alpha line").unwrap());
    assert_eq!(stub.call_count(), 3);
}

#[test]
fn cache_does_not_store_failures() {
    let stub = Arc::new(StubEmbedder::new(4).failing_on("boom"));
    let cached = CachedEmbedder::new(stub.clone(), 100);
    assert!(cached.embed("boom goes the line").is_err());
    assert!(cached.embed("boom goes the line").is_err());
    assert_eq!(stub.call_count(), 2);
}

#[test]
fn cached_hashing_embedder_is_stable() {
    let cached = CachedEmbedder::new(Arc::new(HashingEmbedder::new(64)), 10);
    let direct = HashingEmbedder::new(64).embed("the detective reads the letter").unwrap();
    assert_eq!(cached.embed("the detective reads the letter").unwrap(), direct);
    assert_eq!(cached.name(), "hashing");
}

#[test]
fn completion_lookup_parses_actor() {
    let completion = Arc::new(ScriptedCompletion::constant("```json\n{\"actor\": \"Rooney Mara\"}\n```"));
    let lookup = CompletionActorLookup::new(completion.clone());

    let actor = lookup.find("Erica Albright", "The Social Network").unwrap();
    assert_eq!(actor.as_deref(), Some("Rooney Mara"));

    let calls = completion.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].system_instruction, "You are a movie expert who answers strictly in JSON.");
    assert!((calls[0].temperature - 0.2).abs() < f32::EPSILON);
}

#[test]
fn completion_lookup_surfaces_bad_json() {
    let lookup = CompletionActorLookup::new(Arc::new(ScriptedCompletion::constant("Rooney Mara")));
    assert!(matches!(
        lookup.find("Erica", "The Social Network"),
        Err(RecapError::ActorLookupError(ActorLookupError::InvalidResponse { .. }))
    ));
}

#[test]
fn completion_lookup_propagates_provider_failure() {
    let lookup = CompletionActorLookup::new(Arc::new(ScriptedCompletion::failing()));
    let err = lookup.find("Erica", "The Social Network").unwrap_err();
    assert!(err.is_provider_failure());
}

#[test]
fn unreachable_endpoint_is_request_failure() {
    let config = ProviderConfig {
        openai_base_url: "http://127.0.0.1:9/v1".to_string(),
        connect_timeout_secs: 1,
        request_timeout_secs: 2,
        ..ProviderConfig::default()
    };
    let completion = OpenAiCompletion::new(&config, "test-key".to_string())
        .unwrap()
        .with_max_retries(0);
    assert!(matches!(
        completion.complete("hi", "sys", 0.5),
        Err(RecapError::CompletionError(CompletionError::RequestFailed { .. }))
    ));
}
