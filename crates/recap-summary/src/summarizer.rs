use recap_core::config::SummaryConfig;
use recap_core::constants::{
    DEFAULT_SYSTEM_INSTRUCTION, SENTINEL_COMBINE_FAILED, SENTINEL_NOTHING_SUMMARIZED,
};
use recap_core::errors::RecapResult;
use recap_core::models::{Checkpoint, Outcome, StageResult};
use recap_core::traits::{ICancellation, ICompletionProvider};
use recap_observability::events;
use recap_tokens::{TokenBudget, TokenCounter};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::budget::BudgetReport;
use crate::prompts;
use crate::session::SummarizationSession;

/// How the final summary text came about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SummaryKind {
    /// The combine call merged one or more scene summaries.
    Combined,
    /// No scene could be summarized; the text is a fixed sentinel.
    NothingSummarized,
    /// The combine call failed; the text is a fixed sentinel.
    CombineFailed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryOutput {
    pub summary: String,
    pub kind: SummaryKind,
    pub budget: BudgetReport,
}

/// Summarizes scenes one by one with a rolling context, then combines them.
pub struct IncrementalSummarizer<'a> {
    completion: &'a dyn ICompletionProvider,
    counter: &'a TokenCounter,
    token_budget: usize,
    scene_temperature: f32,
    combine_temperature: f32,
}

impl<'a> IncrementalSummarizer<'a> {
    pub fn new(
        completion: &'a dyn ICompletionProvider,
        counter: &'a TokenCounter,
        config: &SummaryConfig,
    ) -> Self {
        Self {
            completion,
            counter,
            token_budget: config.token_budget,
            scene_temperature: config.scene_temperature,
            combine_temperature: config.combine_temperature,
        }
    }

    /// Run the session to completion, budget exhaustion or cancellation.
    ///
    /// Per-scene failures are skipped; combine failure yields a sentinel
    /// text. Neither is an `Err`.
    pub fn summarize(
        &self,
        session: &mut SummarizationSession,
        cancellation: &dyn ICancellation,
    ) -> StageResult<SummaryOutput> {
        let span =
            recap_observability::summary_span!(session.request_id, session.movie, session.scenes.len());
        let _guard = span.enter();

        session.budget = BudgetReport::new(self.token_budget, session.scenes.len());
        let intro = prompts::intro(&session.movie);
        let budget = TokenBudget::new(self.counter, self.token_budget);

        for index in 0..session.scenes.len() {
            if poll(session, cancellation, Checkpoint::BeforeScene { index }) {
                return Ok(Outcome::Cancelled);
            }
            session.begin_scene(index);

            let prompt = prompts::scene_prompt(
                &session.movie,
                index + 1,
                &session.context_so_far,
                &session.scenes[index],
                &session.language,
            );
            let check = budget.check(&[
                prompt.as_str(),
                session.context_so_far.as_str(),
                intro.as_str(),
            ]);
            if !check.fits() {
                session.budget.exhausted = true;
                events::budget_exhausted(&session.request_id, index, check.projected, check.budget);
                break;
            }
            session.budget.scenes_processed += 1;
            session.budget.peak_projected_tokens =
                session.budget.peak_projected_tokens.max(check.projected);

            let response = self.complete(&prompt, self.scene_temperature);

            if poll(session, cancellation, Checkpoint::AfterSceneResponse { index }) {
                return Ok(Outcome::Cancelled);
            }

            match response {
                Ok(text) => {
                    session
                        .scene_summaries
                        .push(format!("{}\n{}", prompts::scene_divider(index + 1), text));
                    if !session.context_so_far.is_empty() {
                        session.context_so_far.push('\n');
                    }
                    session.context_so_far.push_str(&text);
                    session.budget.scenes_summarized += 1;
                    debug!(scene = index + 1, tokens = check.projected, "scene summarized");
                }
                Err(e) => {
                    session.budget.scenes_failed += 1;
                    events::provider_failure_skipped(&session.request_id, "scene", index, &e.to_string());
                }
            }
        }

        if poll(session, cancellation, Checkpoint::BeforeCombine) {
            return Ok(Outcome::Cancelled);
        }

        if session.scene_summaries.is_empty() {
            events::sentinel_returned(&session.request_id, SENTINEL_NOTHING_SUMMARIZED);
            session.finish();
            return Ok(Outcome::Completed(SummaryOutput {
                summary: SENTINEL_NOTHING_SUMMARIZED.to_string(),
                kind: SummaryKind::NothingSummarized,
                budget: session.budget.clone(),
            }));
        }

        session.begin_combine();
        let prompt =
            prompts::combine_prompt(&session.movie, &session.scene_summaries, &session.language);
        let response = self.complete(&prompt, self.combine_temperature);

        if poll(session, cancellation, Checkpoint::AfterCombine) {
            return Ok(Outcome::Cancelled);
        }

        let (summary, kind) = match response {
            Ok(text) => (text, SummaryKind::Combined),
            Err(e) => {
                events::provider_failure_skipped(&session.request_id, "combine", 0, &e.to_string());
                events::sentinel_returned(&session.request_id, SENTINEL_COMBINE_FAILED);
                (SENTINEL_COMBINE_FAILED.to_string(), SummaryKind::CombineFailed)
            }
        };
        session.finish();

        info!(
            request_id = %session.request_id,
            summarized = session.budget.scenes_summarized,
            requested = session.budget.scenes_requested,
            exhausted = session.budget.exhausted,
            "summary finished"
        );

        Ok(Outcome::Completed(SummaryOutput {
            summary,
            kind,
            budget: session.budget.clone(),
        }))
    }

    /// Trimmed completion; a blank answer counts as a failure.
    fn complete(&self, prompt: &str, temperature: f32) -> RecapResult<String> {
        let text = self
            .completion
            .complete(prompt, DEFAULT_SYSTEM_INSTRUCTION, temperature)?;
        let text = text.trim();
        if text.is_empty() {
            return Err(recap_core::errors::CompletionError::EmptyResponse.into());
        }
        Ok(text.to_string())
    }
}

/// Poll `cancellation`; on cancel, mark the session and log the checkpoint.
pub(crate) fn poll(
    session: &mut SummarizationSession,
    cancellation: &dyn ICancellation,
    checkpoint: Checkpoint,
) -> bool {
    if cancellation.is_cancelled() {
        session.cancel();
        events::stage_cancelled(&session.request_id, checkpoint);
        return true;
    }
    false
}
