use recap_core::errors::*;

#[test]
fn invalid_input_carries_reason() {
    let err = RecapError::invalid_input("query text is empty");
    assert!(err.to_string().contains("query text is empty"));
    assert!(!err.is_provider_failure());
}

#[test]
fn embedding_error_converts_to_recap_error() {
    let err: RecapError = EmbeddingError::DimensionMismatch {
        expected: 1536,
        actual: 384,
    }
    .into();
    assert!(matches!(err, RecapError::EmbeddingError(_)));
    assert!(err.is_provider_failure());
    assert!(err.to_string().contains("1536"));
}

#[test]
fn completion_error_converts_to_recap_error() {
    let err: RecapError = CompletionError::BadStatus {
        status: 429,
        body: "rate limited".into(),
    }
    .into();
    assert!(matches!(err, RecapError::CompletionError(_)));
    assert!(err.is_provider_failure());
    assert!(err.to_string().contains("429"));
}

#[test]
fn index_error_converts_to_recap_error() {
    let err: RecapError = IndexError::LengthMismatch {
        vectors: 3,
        scenes: 4,
    }
    .into();
    assert!(matches!(err, RecapError::IndexError(_)));
    assert!(!err.is_provider_failure());
}

#[test]
fn actor_lookup_error_is_a_provider_failure() {
    let err: RecapError = ActorLookupError::RequestFailed {
        reason: "timeout".into(),
    }
    .into();
    assert!(err.is_provider_failure());
}
