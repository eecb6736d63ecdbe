use serde::{Deserialize, Serialize};

/// How far summarization got against its token budget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetReport {
    pub budget: usize,
    pub scenes_requested: usize,
    /// Scenes that passed the budget check and were sent to the model.
    pub scenes_processed: usize,
    /// Processed scenes whose summary was accepted.
    pub scenes_summarized: usize,
    /// Processed scenes whose model call failed and were skipped.
    pub scenes_failed: usize,
    /// The budget stopped processing before the last scene.
    pub exhausted: bool,
    /// Largest projected cost among the scenes that were sent.
    pub peak_projected_tokens: usize,
}

impl BudgetReport {
    pub fn new(budget: usize, scenes_requested: usize) -> Self {
        Self {
            budget,
            scenes_requested,
            ..Self::default()
        }
    }
}
