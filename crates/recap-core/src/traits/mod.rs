mod actor_lookup;
mod cancellation;
mod completion;
mod embedding;
mod scene_store;
mod vector_index;

pub use actor_lookup::IActorLookup;
pub use cancellation::{ICancellation, NeverCancelled};
pub use completion::ICompletionProvider;
pub use embedding::IEmbeddingProvider;
pub use scene_store::ISceneStore;
pub use vector_index::IVectorIndex;
