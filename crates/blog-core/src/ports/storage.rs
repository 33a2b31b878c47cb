//! Image storage port.

use async_trait::async_trait;

/// Storage holding the images referenced by posts.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Release the image stored at `path` (as recorded in a post's image URL).
    async fn release(&self, path: &str) -> Result<(), StorageError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Image path escapes storage root: {0}")]
    OutsideRoot(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
