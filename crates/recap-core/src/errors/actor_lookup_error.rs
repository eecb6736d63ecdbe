/// Actor lookup errors.
#[derive(Debug, thiserror::Error)]
pub enum ActorLookupError {
    #[error("actor lookup request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("actor lookup response invalid: {reason}")]
    InvalidResponse { reason: String },
}
