//! # recap-matching
//!
//! Query text → embedding → top-K neighbours → accepted matches.
//! [`MatchFilter`] is pure; [`SceneMatcher`] wires it to the embedder, the
//! vector index and the scene store.

pub mod filter;
pub mod matcher;

pub use filter::{MatchFilter, QueryQuality};
pub use matcher::SceneMatcher;
