/// Errors from dataset store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing document exists but is not a valid dataset.
    #[error("corrupt backing document: {0}")]
    Parse(serde_json::Error),

    /// The dataset could not be serialized for writing.
    #[error("serialization error: {0}")]
    Serialize(serde_json::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
