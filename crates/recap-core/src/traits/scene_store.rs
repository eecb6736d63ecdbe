use crate::models::{SceneId, SceneRecord};

/// Read-only mapping from scene id to scene record.
pub trait ISceneStore: Send + Sync {
    fn get(&self, id: SceneId) -> Option<&SceneRecord>;

    /// Every record, ascending by id.
    fn all(&self) -> Vec<&SceneRecord>;

    /// Every record of one movie (exact, case-sensitive), ascending by id.
    fn scenes_of(&self, movie: &str) -> Vec<&SceneRecord>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
