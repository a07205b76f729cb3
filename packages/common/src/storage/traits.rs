use async_trait::async_trait;

use super::error::StorageError;

/// Key-addressed blob storage for publicly served assets.
///
/// Keys are slash-separated relative paths such as `badges/{slug}/full.png`.
/// A successful `put` returns the public URL under which the blob is served.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store bytes under `key` and return the public URL.
    async fn put(&self, key: &str, data: &[u8], content_type: &str)
    -> Result<String, StorageError>;

    /// Retrieve all bytes for a blob.
    async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError>;

    /// Check whether a blob exists.
    async fn exists(&self, key: &str) -> Result<bool, StorageError>;

    /// Delete a blob.
    ///
    /// Returns `true` if the blob was deleted, `false` if it did not exist.
    async fn delete(&self, key: &str) -> Result<bool, StorageError>;

    /// The public URL a blob would be served under, without touching the backend.
    fn public_url(&self, key: &str) -> String;
}

/// Reject empty keys, absolute paths, and traversal components.
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    if key.is_empty() || key.starts_with('/') {
        return Err(StorageError::InvalidKey(key.to_string()));
    }
    if key.split('/').any(|part| part.is_empty() || part == "." || part == "..") {
        return Err(StorageError::InvalidKey(key.to_string()));
    }
    Ok(())
}
