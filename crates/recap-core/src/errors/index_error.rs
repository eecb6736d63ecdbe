/// Vector index and scene store errors.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("failed to load {path}: {reason}")]
    LoadFailed { path: String, reason: String },

    #[error("failed to write {path}: {reason}")]
    WriteFailed { path: String, reason: String },

    #[error("vector file corrupt: {details}")]
    Corrupt { details: String },

    #[error("dimension mismatch: index has {expected}, query has {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("index has {vectors} vectors but store has {scenes} scenes")]
    LengthMismatch { vectors: usize, scenes: usize },

    #[error("duplicate scene id {id}")]
    DuplicateId { id: u64 },
}
