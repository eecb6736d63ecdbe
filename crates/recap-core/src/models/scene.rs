use serde::{Deserialize, Serialize};

/// Scene identifier, unique across the whole store.
pub type SceneId = u64;

/// A contiguous chunk of subtitle lines treated as one semantic unit.
///
/// Immutable once written; the core only ever reads these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneRecord {
    pub id: SceneId,
    pub movie: String,
    /// Start timestamp, `HH:MM:SS`, `HH:MM:SS,mmm` or `HH:MM:SS.mmm`.
    pub timestamp: String,
    /// Scene text. Older mappings call this field `lines`.
    #[serde(alias = "lines")]
    pub text: String,
    /// Timestamp of the movie's last scene, stored on the movie's first scene.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

impl SceneRecord {
    pub fn new(
        id: SceneId,
        movie: impl Into<String>,
        timestamp: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id,
            movie: movie.into(),
            timestamp: timestamp.into(),
            text: text.into(),
            duration: None,
        }
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }
}
