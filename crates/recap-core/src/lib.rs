//! # recap-core
//!
//! Foundation crate for the Recap workspace.
//! Defines the scene and character models, the capability traits the pipeline
//! is assembled from, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::RecapConfig;
pub use errors::{RecapError, RecapResult};
pub use models::{
    CharacterProfile, Checkpoint, MatchResult, Outcome, Relationship, SceneId, SceneRecord,
    StageResult,
};
