//! Fakes and fixture data shared by the workspace's tests.
//!
//! Every fake implements one of the capability traits from `recap-core` and
//! records enough about its calls for tests to assert on them.

pub mod cancellation;
pub mod completion;
pub mod embedding;
pub mod lookup;
pub mod scenes;

pub use cancellation::CountdownCancellation;
pub use completion::{RecordedCall, ScriptedCompletion};
pub use embedding::StubEmbedder;
pub use lookup::StaticActorLookup;
pub use scenes::{scene, sequential_scenes, two_movie_scenes};
