//! # recap-characters
//!
//! Structured character profiles from a finished summary: one extraction
//! call, strict JSON parsing, deny-list filtering, and an actor name per
//! surviving character from a fallback chain of lookups.

pub mod chain;
pub mod deny;
pub mod extractor;
pub mod parse;
pub mod validity;

pub use chain::ActorLookupChain;
pub use deny::DenyLists;
pub use extractor::CharacterProfileExtractor;
pub use parse::{parse_characters, scene_numbers, strip_code_fences};
pub use validity::is_valid_character_name;
