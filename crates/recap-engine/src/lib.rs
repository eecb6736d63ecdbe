//! # recap-engine
//!
//! Wires the Recap pipeline together: query → best matching scene → every
//! scene of that movie up to the match → incremental summary → character
//! profiles → chunk summaries. Also owns the hot-swappable scene index and
//! the per-process cancellation registry.

pub mod engine;
pub mod factory;
pub mod request;

pub use engine::{IndexUpdate, RecapEngine};
pub use factory::{build_actor_lookup, build_completion, build_embedder, load_or_empty_index};
pub use request::{RecapOutcome, RecapRequest, RecapResponse};
