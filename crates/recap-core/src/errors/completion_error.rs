/// Text-completion provider errors.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("completion request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("completion provider returned status {status}: {body}")]
    BadStatus { status: u16, body: String },

    #[error("completion response had no content")]
    EmptyResponse,

    #[error("provider unavailable: {provider}")]
    ProviderUnavailable { provider: String },
}
