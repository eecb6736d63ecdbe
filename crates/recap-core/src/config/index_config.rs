use serde::{Deserialize, Serialize};

use super::defaults;

/// On-disk index location and scene building.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    pub index_dir: String,
    pub scenes_file: String,
    pub vectors_file: String,
    /// Subtitle cues grouped into one scene.
    pub lines_per_scene: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            index_dir: defaults::DEFAULT_INDEX_DIR.to_string(),
            scenes_file: defaults::DEFAULT_SCENES_FILE.to_string(),
            vectors_file: defaults::DEFAULT_VECTORS_FILE.to_string(),
            lines_per_scene: defaults::DEFAULT_LINES_PER_SCENE,
        }
    }
}
