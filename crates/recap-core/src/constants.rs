/// Recap system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Timestamp returned for a movie that has no scenes in the store.
pub const EMPTY_DURATION: &str = "00:00:00,000";

/// Returned by the summarizer when no scene could be summarized.
pub const SENTINEL_NOTHING_SUMMARIZED: &str =
    "⚠️ The scenes could not be summarized within the token limit.";

/// Returned by the summarizer when the final combine call fails.
pub const SENTINEL_COMBINE_FAILED: &str = "⚠️ Error summarizing scenes.";

/// Placeholder used for a chunk whose summary call failed.
pub const PLACEHOLDER_CHUNK_FAILED: &str = "⚠️ Could not summarize these scenes.";

/// Language used when a tag is unknown.
pub const FALLBACK_LANGUAGE_TAG: &str = "en";

/// Default system instruction for narrative calls.
pub const DEFAULT_SYSTEM_INSTRUCTION: &str = "You are a helpful assistant.";
