//! Animal Application Service (Use Case)
//!
//! Orchestrates repository operations for the animal catalog. No validation happens
//! here: uniqueness and value constraints are enforced by the store.

use std::sync::Arc;

use bestiary::{Animal, AnimalId, AnimalRepository, DomainError, NewAnimal};

/// Application service for Animal operations
pub struct AnimalService<R: AnimalRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: AnimalRepository + ?Sized> AnimalService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// List animals, optionally narrowed by a case-insensitive name fragment and a
    /// minimum lifespan. An empty fragment counts as absent.
    pub async fn list(
        &self,
        name_fragment: Option<&str>,
        min_lifespan: Option<f64>,
    ) -> Result<Vec<Animal>, DomainError> {
        match (name_fragment.filter(|f| !f.is_empty()), min_lifespan) {
            (None, None) => self.repo.find_all().await,
            (None, Some(years)) => self.by_min_lifespan(years).await,
            (Some(fragment), None) => self.repo.find_by_name_containing_ignore_case(fragment).await,
            (Some(fragment), Some(years)) => {
                let mut animals = self.repo.find_by_name_containing_ignore_case(fragment).await?;
                animals.retain(|a| a.lifespan >= years);
                Ok(animals)
            }
        }
    }

    /// Animals of a color, ignoring case
    pub async fn by_color(&self, color: &str) -> Result<Vec<Animal>, DomainError> {
        self.repo.find_by_color_ignore_case(color).await
    }

    /// Animals living at least `years`
    pub async fn by_min_lifespan(&self, years: f64) -> Result<Vec<Animal>, DomainError> {
        self.repo.find_by_min_lifespan(years).await
    }

    pub async fn get_by_id(&self, id: AnimalId) -> Result<Animal, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Animal", id))
    }

    /// Exact name lookup, ignoring case
    pub async fn get_by_name(&self, name: &str) -> Result<Option<Animal>, DomainError> {
        self.repo.find_by_name_ignore_case(name).await
    }

    /// Create an Animal whose color is `color`, whatever the payload says
    pub async fn create(&self, color: &str, animal: NewAnimal) -> Result<Animal, DomainError> {
        let saved = self.repo.save(None, &animal.with_color(color)).await?;

        tracing::info!("Created Animal: {} ({})", saved.name, saved.id);

        Ok(saved)
    }

    /// Overwrite every field of an Animal except its id
    pub async fn update(&self, id: AnimalId, animal: NewAnimal) -> Result<Animal, DomainError> {
        let current = self.get_by_id(id).await?;
        let saved = self.repo.save(Some(current.id), &animal).await?;

        tracing::info!("Updated Animal: {} ({})", saved.name, saved.id);

        Ok(saved)
    }

    /// Delete an Animal, failing with `NotFound` when there is nothing to delete
    pub async fn delete(&self, id: AnimalId) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::not_found("Animal", id));
        }

        tracing::info!("Deleted Animal: {}", id);

        Ok(())
    }

    /// Insert every catalog entry whose name is not taken yet, returning how many
    /// were inserted
    pub async fn seed(&self, catalog: Vec<NewAnimal>) -> Result<usize, DomainError> {
        let mut inserted = 0;

        for animal in catalog {
            if self.get_by_name(&animal.name).await?.is_some() {
                continue;
            }
            self.repo.save(None, &animal).await?;
            inserted += 1;
        }

        tracing::info!("Seeded {} Animals", inserted);

        Ok(inserted)
    }
}
