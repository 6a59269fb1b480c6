//! Image Store Port
//!
//! Where uploaded image bytes end up.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, StoredImageName};

/// Storage for uploaded images
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Write `bytes` under `name`.
    ///
    /// On error nothing may remain stored under `name`.
    async fn put(&self, name: &StoredImageName, bytes: &[u8]) -> Result<(), DomainError>;
}
