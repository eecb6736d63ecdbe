//! OpenAI-compatible chat completion and embedding clients.

mod chat;
mod embeddings;

pub use chat::{parse_chat_response, OpenAiCompletion};
pub use embeddings::{parse_embedding_response, OpenAiEmbedder};

/// `{base}/{path}` without doubled slashes.
pub(crate) fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
