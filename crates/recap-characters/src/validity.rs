//! Gate for names worth sending to an actor lookup.

const PRONOUNS_AND_VOICES: &[&str] = &["he", "she", "they", "him", "her", "it", "voice", "voice-over"];
const ARTICLES: &[&str] = &["the", "a", "an"];

/// Whether `name` looks like a character name rather than a pronoun, a voice
/// credit, an article or a number. Only Latin letters, digits, spaces and
/// `-'.` are allowed.
pub fn is_valid_character_name(name: &str) -> bool {
    let trimmed = name.trim();
    if trimmed.chars().count() < 2 {
        return false;
    }
    let lowered = trimmed.to_lowercase();
    if PRONOUNS_AND_VOICES.contains(&lowered.as_str()) || ARTICLES.contains(&lowered.as_str()) {
        return false;
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '\'' | '.'))
    {
        return false;
    }
    !trimmed.chars().all(|c| c.is_ascii_digit())
}
