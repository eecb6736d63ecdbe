use recap_core::config::SummaryConfig;
use recap_core::constants::{DEFAULT_SYSTEM_INSTRUCTION, PLACEHOLDER_CHUNK_FAILED};
use recap_core::models::{Checkpoint, Outcome, StageResult};
use recap_core::traits::{ICancellation, ICompletionProvider};
use recap_observability::events;
use tracing::debug;

use crate::prompts;
use crate::session::SummarizationSession;
use crate::summarizer::poll;

/// Short, stateless summaries of fixed-size batches of scenes.
pub struct ChunkSummarizer<'a> {
    completion: &'a dyn ICompletionProvider,
    chunk_size: usize,
    temperature: f32,
}

impl<'a> ChunkSummarizer<'a> {
    pub fn new(completion: &'a dyn ICompletionProvider, config: &SummaryConfig) -> Self {
        Self {
            completion,
            chunk_size: config.chunk_size.max(1),
            temperature: config.chunk_temperature,
        }
    }

    /// One summary per `chunk_size` scenes among those the session processed.
    /// A failed chunk gets a placeholder and the batch continues.
    pub fn summarize_chunks(
        &self,
        session: &mut SummarizationSession,
        cancellation: &dyn ICancellation,
    ) -> StageResult<Vec<String>> {
        let chunks: Vec<String> = session
            .processed_scenes()
            .chunks(self.chunk_size)
            .map(|c| c.join("\n"))
            .collect();

        let span = recap_observability::chunk_span!(session.request_id, chunks.len());
        let _guard = span.enter();

        let mut summaries = Vec::with_capacity(chunks.len());
        for (index, chunk) in chunks.iter().enumerate() {
            if poll(session, cancellation, Checkpoint::BeforeChunk { index }) {
                return Ok(Outcome::Cancelled);
            }

            let prompt = prompts::chunk_prompt(&session.movie, chunk, &session.language);
            let response =
                self.completion
                    .complete(&prompt, DEFAULT_SYSTEM_INSTRUCTION, self.temperature);

            if poll(session, cancellation, Checkpoint::AfterChunkResponse { index }) {
                return Ok(Outcome::Cancelled);
            }

            match response {
                Ok(text) if !text.trim().is_empty() => {
                    debug!(chunk = index + 1, "chunk summarized");
                    summaries.push(text.trim().to_string());
                }
                Ok(_) => {
                    events::provider_failure_skipped(&session.request_id, "chunk", index, "empty response");
                    summaries.push(PLACEHOLDER_CHUNK_FAILED.to_string());
                }
                Err(e) => {
                    events::provider_failure_skipped(&session.request_id, "chunk", index, &e.to_string());
                    summaries.push(PLACEHOLDER_CHUNK_FAILED.to_string());
                }
            }
        }

        session.chunk_summaries = summaries.clone();
        Ok(Outcome::Completed(summaries))
    }
}
