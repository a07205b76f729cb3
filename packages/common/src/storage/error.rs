use thiserror::Error;

/// Errors that can occur during blob storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The requested blob was not found.
    #[error("blob not found: {0}")]
    NotFound(String),

    /// The key contains path traversal components or is empty.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    /// An I/O error occurred.
    #[error("storage IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The remote backend rejected the request.
    #[error("storage backend error: {0}")]
    Backend(String),
}
