//! Parsing of the extraction model's JSON answer.

use std::sync::LazyLock;

use recap_core::models::CharacterProfile;
use regex::Regex;
use serde::Deserialize;

static SCENE_DIVIDER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"—+\s*Scene\s+(\d+)\s*—+").ok());

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    characters: Vec<CharacterProfile>,
}

/// Remove a surrounding Markdown code fence (```json ... ```), if any.
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") on the opening fence line.
    let body = match rest.find('\n') {
        Some(pos) if rest[..pos].trim().chars().all(|c| c.is_ascii_alphanumeric()) => &rest[pos + 1..],
        _ => rest.trim_start_matches("json"),
    };
    body.trim_end().trim_end_matches("```").trim()
}

/// Parse `{"characters": [...]}`, fences allowed.
pub fn parse_characters(raw: &str) -> Result<Vec<CharacterProfile>, serde_json::Error> {
    let envelope: Envelope = serde_json::from_str(strip_code_fences(raw))?;
    Ok(envelope.characters)
}

/// Scene numbers named by the dividers in a summary, in order of appearance.
pub fn scene_numbers(summary: &str) -> Vec<u32> {
    let Some(re) = SCENE_DIVIDER.as_ref() else {
        return Vec::new();
    };
    re.captures_iter(summary)
        .filter_map(|c| c.get(1)?.as_str().parse().ok())
        .collect()
}
