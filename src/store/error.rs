use thiserror::Error;

/// Rejected form input. Nothing is changed or written when one of these is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields.")]
    MissingField,
    #[error("\"{0}\" is not a valid amount.")]
    InvalidAmount(String),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed stored data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("persistence writer is no longer running")]
    WriterClosed,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("expense store has not been hydrated yet")]
    NotReady,
    #[error(transparent)]
    Storage(#[from] StorageError),
}
