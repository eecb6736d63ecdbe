use recap_core::config::CharacterConfig;
use recap_core::models::CharacterProfile;

/// Case-insensitive substring deny lists for names and relationship targets.
#[derive(Debug, Clone, Default)]
pub struct DenyLists {
    names: Vec<String>,
    relationships: Vec<String>,
}

impl DenyLists {
    pub fn new(names: &[String], relationships: &[String]) -> Self {
        Self {
            names: lowercase_all(names),
            relationships: lowercase_all(relationships),
        }
    }

    pub fn from_config(config: &CharacterConfig) -> Self {
        Self::new(&config.name_deny_list, &config.relationship_deny_list)
    }

    pub fn name_denied(&self, name: &str) -> bool {
        contains_any(name, &self.names)
    }

    pub fn relationship_denied(&self, with: &str) -> bool {
        contains_any(with, &self.relationships)
    }

    /// Drop the profile if its name is denied; otherwise drop its denied
    /// relationships and keep the rest.
    pub fn apply(&self, mut profile: CharacterProfile) -> Option<CharacterProfile> {
        if self.name_denied(&profile.name) {
            return None;
        }
        profile
            .relationships
            .retain(|r| !self.relationship_denied(&r.with));
        Some(profile)
    }
}

fn lowercase_all(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

fn contains_any(haystack: &str, needles: &[String]) -> bool {
    let lowered = haystack.to_lowercase();
    needles.iter().any(|n| lowered.contains(n.as_str()))
}
