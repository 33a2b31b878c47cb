//! Local filesystem image store.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;

use blog_core::ports::{ImageStore, StorageError};

/// Images stored as files under a root directory; post image URLs are paths
/// relative to that root (`images/<file>`).
pub struct LocalImageStore {
    root: PathBuf,
}

impl LocalImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Load the root from `IMAGE_ROOT`, defaulting to the working directory.
    pub fn from_env() -> Self {
        Self::new(std::env::var("IMAGE_ROOT").unwrap_or_else(|_| ".".to_string()))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve `path` under the root, refusing anything that climbs out of it.
    fn resolve(&self, path: &str) -> Result<PathBuf, StorageError> {
        let relative = Path::new(path.trim_start_matches(['/', '\\']));

        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return Err(StorageError::OutsideRoot(path.to_string()));
        }

        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn release(&self, path: &str) -> Result<(), StorageError> {
        let file = self.resolve(path)?;
        tokio::fs::remove_file(&file).await?;

        tracing::debug!(path = %file.display(), "Image released");
        Ok(())
    }
}
