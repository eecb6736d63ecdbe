use serde::{Deserialize, Serialize};

use super::scene::{SceneId, SceneRecord};

/// A raw nearest-neighbour hit from the vector index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    pub id: SceneId,
    /// Dissimilarity; lower is closer.
    pub distance: f32,
}

/// A hit that passed the match filter, resolved to its scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub scene: SceneRecord,
    /// Distance to the query; lower is closer.
    pub score: f32,
}
