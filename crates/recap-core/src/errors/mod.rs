mod actor_lookup_error;
mod completion_error;
mod config_error;
mod embedding_error;
mod index_error;
mod recap_error;

pub use actor_lookup_error::ActorLookupError;
pub use completion_error::CompletionError;
pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use index_error::IndexError;
pub use recap_error::{RecapError, RecapResult};
