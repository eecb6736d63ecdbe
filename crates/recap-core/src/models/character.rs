use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One directed relationship of a character.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Relationship {
    pub with: String,
    pub relation: String,
    pub sentiment: String,
}

/// Structured character data derived from a finished summary.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterProfile {
    pub name: String,
    pub role: String,
    pub traits: BTreeSet<String>,
    pub goals: BTreeSet<String>,
    pub relationships: Vec<Relationship>,
    pub description: String,
    pub actor: Option<String>,
}
