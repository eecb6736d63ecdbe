//! Fixed language-tag lookup used by every prompt.

use crate::constants::FALLBACK_LANGUAGE_TAG;

/// Supported tags and the language name the model is told to answer in.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("bg", "Bulgarian"),
    ("de", "German"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("tr", "Turkish"),
    ("el", "Greek"),
    ("uk", "Ukrainian"),
    ("pl", "Polish"),
];

/// Human-readable language name for a tag. Region suffixes (`bg-BG`, `pt_BR`)
/// and case are ignored; unknown tags fall back to English.
pub fn language_name(tag: &str) -> &'static str {
    let primary = tag
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    SUPPORTED_LANGUAGES
        .iter()
        .find(|(t, _)| *t == primary)
        .or_else(|| {
            SUPPORTED_LANGUAGES
                .iter()
                .find(|(t, _)| *t == FALLBACK_LANGUAGE_TAG)
        })
        .map(|(_, name)| *name)
        .unwrap_or("English")
}

/// Whether the tag maps to a supported language (rather than the fallback).
pub fn is_supported(tag: &str) -> bool {
    let primary = tag.trim().split(['-', '_']).next().unwrap_or_default();
    SUPPORTED_LANGUAGES
        .iter()
        .any(|(t, _)| t.eq_ignore_ascii_case(primary))
}

/// Instruction appended to every prompt so the model answers in one language only.
pub fn language_instruction(tag: &str) -> String {
    let name = language_name(tag);
    format!("Write your answer only in {name}. Do not use any other language.")
}
