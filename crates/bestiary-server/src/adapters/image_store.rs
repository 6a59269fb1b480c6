//! Filesystem implementation of ImageStore
//!
//! Writes uploads below a configured root directory, first into a hidden
//! `.{token}.part` file which is renamed into place once fully written.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use bestiary::{DomainError, ImageStore, StoredImageName};

/// Image store backed by a local directory
pub struct FsImageStore {
    root: PathBuf,
}

impl FsImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn storage_error(action: &str, path: &Path, e: std::io::Error) -> DomainError {
        DomainError::Storage(format!("failed to {} {}: {}", action, path.display(), e))
    }
}

#[async_trait]
impl ImageStore for FsImageStore {
    async fn put(&self, name: &StoredImageName, bytes: &[u8]) -> Result<(), DomainError> {
        // create_dir_all succeeds when the directory already exists, including when a
        // concurrent upload created it first
        fs::create_dir_all(&self.root)
            .await
            .map_err(|e| Self::storage_error("create", &self.root, e))?;

        let target = self.root.join(name.as_str());
        let partial = self.root.join(format!(".{}.part", name.token()));

        let written = match fs::write(&partial, bytes).await {
            Ok(()) => fs::rename(&partial, &target)
                .await
                .map_err(|e| Self::storage_error("move into place", &target, e)),
            Err(e) => Err(Self::storage_error("write", &partial, e)),
        };

        if written.is_err() {
            let _ = fs::remove_file(&partial).await;
        }

        written
    }
}
