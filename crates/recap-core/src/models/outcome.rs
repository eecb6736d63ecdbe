use std::fmt;

use crate::errors::RecapResult;

/// Result of a pipeline stage that can be cancelled cooperatively.
///
/// Stages return [`StageResult<T>`]: `Ok(Completed)`, `Ok(Cancelled)` or
/// `Err(failure)`. Cancellation is not an error, so callers can answer with
/// "no content" instead of an error payload.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum Outcome<T> {
    Completed(T),
    Cancelled,
}

pub type StageResult<T> = RecapResult<Outcome<T>>;

impl<T> Outcome<T> {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    pub fn completed(self) -> Option<T> {
        match self {
            Self::Completed(v) => Some(v),
            Self::Cancelled => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Completed(v) => Outcome::Completed(f(v)),
            Self::Cancelled => Outcome::Cancelled,
        }
    }
}

/// Points at which a stage polls for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checkpoint {
    BeforeScene { index: usize },
    AfterSceneResponse { index: usize },
    BeforeCombine,
    AfterCombine,
    BeforeChunk { index: usize },
    AfterChunkResponse { index: usize },
    BeforeExtraction,
    AfterExtraction,
}

impl fmt::Display for Checkpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BeforeScene { index } => write!(f, "before scene {}", index + 1),
            Self::AfterSceneResponse { index } => write!(f, "after scene {} response", index + 1),
            Self::BeforeCombine => f.write_str("before combine"),
            Self::AfterCombine => f.write_str("after combine"),
            Self::BeforeChunk { index } => write!(f, "before chunk {}", index + 1),
            Self::AfterChunkResponse { index } => write!(f, "after chunk {} response", index + 1),
            Self::BeforeExtraction => f.write_str("before extraction"),
            Self::AfterExtraction => f.write_str("after extraction"),
        }
    }
}
