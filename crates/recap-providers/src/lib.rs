//! # recap-providers
//!
//! Concrete implementations of the capability traits in `recap-core`:
//! OpenAI-compatible chat completion and embeddings over blocking HTTP with
//! explicit timeouts, TMDb and completion-backed actor lookup, a local
//! hashing embedder, and a content-hash embedding cache.

pub mod cached;
pub mod hashing;
pub mod http;
pub mod lookup;
pub mod openai;

pub use cached::CachedEmbedder;
pub use hashing::HashingEmbedder;
pub use lookup::{CompletionActorLookup, TmdbActorLookup};
pub use openai::{OpenAiCompletion, OpenAiEmbedder};
