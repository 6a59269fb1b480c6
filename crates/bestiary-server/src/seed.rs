//! Bundled starter catalog

use thiserror::Error;

use bestiary::{AnimalRepository, DomainError, NewAnimal};

use crate::application::AnimalService;
use crate::models::AnimalRequest;

const CATALOG_JSON: &str = include_str!("../data/seed_animals.json");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Invalid seed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// The bundled catalog, in the same JSON shape the API accepts
pub fn catalog() -> Result<Vec<NewAnimal>, SeedError> {
    let requests: Vec<AnimalRequest> = serde_json::from_str(CATALOG_JSON)?;
    Ok(requests.into_iter().map(Into::into).collect())
}

/// Insert the bundled animals that aren't in the store yet
pub async fn seed_catalog<R: AnimalRepository + ?Sized>(
    service: &AnimalService<R>,
) -> Result<usize, SeedError> {
    Ok(service.seed(catalog()?).await?)
}
