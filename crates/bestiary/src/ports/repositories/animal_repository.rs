//! Animal Repository Port
//!
//! Abstract interface for Animal persistence operations.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Animal, AnimalId, NewAnimal};

/// Repository interface for Animal entities.
///
/// Listing methods return records in ascending id order. Uniqueness of names and
/// scientific names is the store's job: a violation comes back from `save` as
/// `DomainError::Conflict`.
#[async_trait]
pub trait AnimalRepository: Send + Sync {
    /// Find all Animals
    async fn find_all(&self) -> Result<Vec<Animal>, DomainError>;

    /// Find an Animal by ID
    async fn find_by_id(&self, id: AnimalId) -> Result<Option<Animal>, DomainError>;

    /// Find Animals whose color equals `color`, ignoring case
    async fn find_by_color_ignore_case(&self, color: &str) -> Result<Vec<Animal>, DomainError>;

    /// Find the Animal whose name equals `name`, ignoring case
    async fn find_by_name_ignore_case(&self, name: &str) -> Result<Option<Animal>, DomainError>;

    /// Find Animals whose name contains `fragment`, ignoring case
    async fn find_by_name_containing_ignore_case(
        &self,
        fragment: &str,
    ) -> Result<Vec<Animal>, DomainError>;

    /// Find Animals living at least `years`
    async fn find_by_min_lifespan(&self, years: f64) -> Result<Vec<Animal>, DomainError>;

    /// Save an Animal: insert when `id` is `None`, otherwise overwrite every field of
    /// the existing row (`NotFound` if it is gone)
    async fn save(&self, id: Option<AnimalId>, animal: &NewAnimal)
        -> Result<Animal, DomainError>;

    /// Delete an Animal by ID, returning whether a row was removed
    async fn delete(&self, id: AnimalId) -> Result<bool, DomainError>;
}
