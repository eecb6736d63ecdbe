use recap_core::models::CharacterProfile;
use recap_summary::{BudgetReport, SummaryKind};
use serde::{Deserialize, Serialize};

/// One recap query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecapRequest {
    pub request_id: String,
    pub text: String,
    /// Language tag for generated prose; the configured default when absent.
    #[serde(default)]
    pub language: Option<String>,
}

impl RecapRequest {
    /// A request with a fresh random id.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            request_id: uuid::Uuid::new_v4().to_string(),
            text: text.into(),
            language: None,
        }
    }

    pub fn with_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = request_id.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

/// Everything known about the story up to the matched scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecapResponse {
    pub movie: String,
    /// Timestamp of the matched scene.
    pub timestamp: String,
    /// Timestamp of the movie's last scene.
    pub duration: String,
    pub summary_until_now: String,
    pub summary_kind: SummaryKind,
    pub character_profiles: Vec<CharacterProfile>,
    pub chunk_summaries: Vec<String>,
    pub budget: BudgetReport,
    /// Distance of the matched scene from the query.
    pub score: f32,
    /// Selected scenes whose timestamp could not be parsed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub malformed_scene_ids: Vec<u64>,
}

/// Result of [`RecapEngine::recap`](crate::RecapEngine::recap).
#[derive(Debug, Clone, PartialEq)]
pub enum RecapOutcome {
    Matched(Box<RecapResponse>),
    /// No scene passed the relevance gates.
    NoMatch,
    /// Cancelled at a checkpoint; there is no content to return.
    Cancelled,
}

impl RecapOutcome {
    pub fn response(&self) -> Option<&RecapResponse> {
        match self {
            Self::Matched(r) => Some(r),
            _ => None,
        }
    }
}
