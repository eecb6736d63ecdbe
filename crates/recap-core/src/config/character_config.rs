use serde::{Deserialize, Serialize};

use super::defaults;

/// Character profile extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterConfig {
    pub max_characters: usize,
    pub temperature: f32,
    /// Characters whose name contains any of these (case-insensitive) are dropped.
    pub name_deny_list: Vec<String>,
    /// Relationships whose `with` contains any of these (case-insensitive) are dropped.
    pub relationship_deny_list: Vec<String>,
    /// Annotate surviving characters with an actor lookup.
    pub lookup_actors: bool,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            max_characters: defaults::DEFAULT_MAX_CHARACTERS,
            temperature: defaults::DEFAULT_EXTRACTION_TEMPERATURE,
            name_deny_list: to_owned(defaults::DEFAULT_NAME_DENY_LIST),
            relationship_deny_list: to_owned(defaults::DEFAULT_RELATIONSHIP_DENY_LIST),
            lookup_actors: defaults::DEFAULT_LOOKUP_ACTORS,
        }
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
