//! Per-request summarization state.

use serde::{Deserialize, Serialize};

use crate::budget::BudgetReport;

/// Where a session is in its lifecycle.
///
/// `Idle → Summarizing(i) → Combining → Done`; `Cancelled` can be entered
/// from any non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Idle,
    /// Working on the scene at this zero-based index.
    Summarizing(usize),
    Combining,
    Done,
    Cancelled,
}

impl SessionState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Cancelled)
    }
}

/// Everything one request accumulates while it is summarized.
#[derive(Debug, Clone)]
pub struct SummarizationSession {
    pub request_id: String,
    pub movie: String,
    pub language: String,
    /// Ordered scene texts to summarize.
    pub scenes: Vec<String>,
    /// Accepted per-scene summaries joined by newlines, without dividers.
    pub context_so_far: String,
    /// Accepted per-scene summaries, each prefixed with its divider.
    pub scene_summaries: Vec<String>,
    pub chunk_summaries: Vec<String>,
    pub budget: BudgetReport,
    pub cancelled: bool,
    state: SessionState,
}

impl SummarizationSession {
    pub fn new(
        request_id: impl Into<String>,
        movie: impl Into<String>,
        language: impl Into<String>,
        scenes: Vec<String>,
    ) -> Self {
        Self {
            request_id: request_id.into(),
            movie: movie.into(),
            language: language.into(),
            scenes,
            context_so_far: String::new(),
            scene_summaries: Vec::new(),
            chunk_summaries: Vec::new(),
            budget: BudgetReport::default(),
            cancelled: false,
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Scenes that made it past the budget check.
    pub fn processed_scenes(&self) -> &[String] {
        let n = self.budget.scenes_processed.min(self.scenes.len());
        &self.scenes[..n]
    }

    pub(crate) fn begin_scene(&mut self, index: usize) {
        self.state = SessionState::Summarizing(index);
    }

    pub(crate) fn begin_combine(&mut self) {
        self.state = SessionState::Combining;
    }

    pub(crate) fn finish(&mut self) {
        if !self.state.is_terminal() {
            self.state = SessionState::Done;
        }
    }

    pub(crate) fn cancel(&mut self) {
        self.cancelled = true;
        self.state = SessionState::Cancelled;
    }
}
