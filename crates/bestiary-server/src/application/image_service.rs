//! Image Application Service (Use Case)
//!
//! Names uploaded images and hands them to the image store.

use std::sync::Arc;

use bestiary::{DomainError, ImageStore, StoredImageName};

/// Application service for image uploads
pub struct ImageService<S: ImageStore + ?Sized> {
    store: Arc<S>,
}

impl<S: ImageStore + ?Sized> ImageService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Store an upload under a fresh unique name and return its public URL
    pub async fn upload(
        &self,
        original_name: Option<&str>,
        bytes: &[u8],
    ) -> Result<String, DomainError> {
        let name = StoredImageName::generate(original_name);

        if let Err(e) = self.store.put(&name, bytes).await {
            tracing::error!("Failed to store upload {}: {}", name, e);
            return Err(e);
        }

        tracing::info!("Stored upload: {} ({} bytes)", name, bytes.len());

        Ok(name.public_url())
    }
}
