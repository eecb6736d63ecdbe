mod character;
pub mod language;
mod match_result;
mod outcome;
mod scene;

pub use character::{CharacterProfile, Relationship};
pub use match_result::{MatchResult, Neighbor};
pub use outcome::{Checkpoint, Outcome, StageResult};
pub use scene::{SceneId, SceneRecord};
