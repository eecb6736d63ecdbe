//! # recap-summary
//!
//! Turns the ordered scenes of a movie into a "story so far":
//! one model call per scene with a rolling context, cut off by a token budget,
//! merged by a final combine call, plus stateless per-chunk summaries.
//! Every stage polls its cancellation predicate at fixed checkpoints and
//! makes no further calls once it fires.

pub mod budget;
pub mod chunks;
pub mod prompts;
pub mod session;
pub mod summarizer;

pub use budget::BudgetReport;
pub use chunks::ChunkSummarizer;
pub use session::{SessionState, SummarizationSession};
pub use summarizer::{IncrementalSummarizer, SummaryKind, SummaryOutput};
