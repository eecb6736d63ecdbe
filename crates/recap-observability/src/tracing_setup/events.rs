//! Structured log events for key pipeline outcomes.
//!
//! Each function emits a `tracing` event with structured fields.

use recap_core::models::Checkpoint;

/// Log an accepted scene match.
pub fn scene_matched(request_id: &str, scene_id: u64, movie: &str, score: f32) {
    tracing::info!(
        event = "scene_matched",
        request_id = %request_id,
        scene_id,
        movie = %movie,
        score,
        "scene matched"
    );
}

/// Log a query that produced no acceptable match.
pub fn no_match(request_id: &str, candidates: usize, reason: &str) {
    tracing::info!(
        event = "no_match",
        request_id = %request_id,
        candidates,
        reason = %reason,
        "no scene matched"
    );
}

/// Log a stage stopped by cancellation.
pub fn stage_cancelled(request_id: &str, checkpoint: Checkpoint) {
    tracing::info!(
        event = "stage_cancelled",
        request_id = %request_id,
        checkpoint = %checkpoint,
        "cancelled early"
    );
}

/// Log a provider failure that was skipped or replaced by a placeholder.
pub fn provider_failure_skipped(request_id: &str, stage: &str, index: usize, error: &str) {
    tracing::warn!(
        event = "provider_failure_skipped",
        request_id = %request_id,
        stage = %stage,
        index = index + 1,
        error = %error,
        "provider call failed, continuing"
    );
}

/// Log the point where the token budget stopped summarization.
pub fn budget_exhausted(request_id: &str, scene_index: usize, projected: usize, budget: usize) {
    tracing::info!(
        event = "budget_exhausted",
        request_id = %request_id,
        scene = scene_index + 1,
        projected,
        budget,
        "token budget reached, stopping"
    );
}

/// Log a terminal sentinel answer (nothing summarized, or combine failed).
pub fn sentinel_returned(request_id: &str, sentinel: &str) {
    tracing::warn!(
        event = "sentinel_returned",
        request_id = %request_id,
        sentinel = %sentinel,
        "returning sentinel summary"
    );
}
