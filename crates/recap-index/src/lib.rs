//! # recap-index
//!
//! The searchable side of the pipeline: a brute-force squared-L2 index over
//! scene embeddings, the scene store it is aligned with, their on-disk
//! snapshot, and the subtitle → scene → embedding build that produces them.

pub mod builder;
pub mod flat;
pub mod handle;
pub mod snapshot;
pub mod store;
pub mod subtitles;

pub use builder::{BuildReport, IndexBuilder};
pub use flat::FlatL2Index;
pub use handle::{SceneIndex, SceneIndexHandle};
pub use snapshot::{load_snapshot, save_snapshot, SnapshotStore};
pub use store::InMemorySceneStore;
pub use subtitles::{group_into_scenes, parse_srt, SceneDraft, SubtitleCue};
