//! In-memory implementation of AnimalRepository
//!
//! Mirrors the constraints of the `animals` table so service and route tests see the
//! same failures a database would produce.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use bestiary::{Animal, AnimalId, AnimalRepository, DomainError, NewAnimal};

struct Table {
    next_id: AnimalId,
    rows: BTreeMap<AnimalId, Animal>,
}

pub struct InMemoryAnimalRepository {
    table: Mutex<Table>,
}

impl Default for InMemoryAnimalRepository {
    fn default() -> Self {
        Self {
            table: Mutex::new(Table {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }
}

impl InMemoryAnimalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.table.lock().await.rows.len()
    }
}

impl Table {
    fn select(&self, predicate: impl Fn(&Animal) -> bool) -> Vec<Animal> {
        self.rows.values().filter(|a| predicate(a)).cloned().collect()
    }

    fn check_constraints(
        &self,
        id: Option<AnimalId>,
        animal: &NewAnimal,
    ) -> Result<(), DomainError> {
        if animal.lifespan.is_nan() || animal.lifespan < 0.0 {
            return Err(DomainError::Validation(
                "lifespan violates check constraint".to_string(),
            ));
        }

        for other in self.rows.values().filter(|a| Some(a.id) != id) {
            if other.name == animal.name {
                return Err(DomainError::Conflict(format!(
                    "duplicate name: {}",
                    animal.name
                )));
            }
            if other.scientific_name.is_some() && other.scientific_name == animal.scientific_name {
                return Err(DomainError::Conflict(format!(
                    "duplicate scientific name: {}",
                    other.scientific_name.as_deref().unwrap_or_default()
                )));
            }
        }

        Ok(())
    }
}

#[async_trait]
impl AnimalRepository for InMemoryAnimalRepository {
    async fn find_all(&self) -> Result<Vec<Animal>, DomainError> {
        Ok(self.table.lock().await.select(|_| true))
    }

    async fn find_by_id(&self, id: AnimalId) -> Result<Option<Animal>, DomainError> {
        Ok(self.table.lock().await.rows.get(&id).cloned())
    }

    async fn find_by_color_ignore_case(&self, color: &str) -> Result<Vec<Animal>, DomainError> {
        Ok(self.table.lock().await.select(|a| a.has_color(color)))
    }

    async fn find_by_name_ignore_case(&self, name: &str) -> Result<Option<Animal>, DomainError> {
        Ok(self.table.lock().await.select(|a| a.has_name(name)).into_iter().next())
    }

    async fn find_by_name_containing_ignore_case(
        &self,
        fragment: &str,
    ) -> Result<Vec<Animal>, DomainError> {
        Ok(self.table.lock().await.select(|a| a.name_contains(fragment)))
    }

    async fn find_by_min_lifespan(&self, years: f64) -> Result<Vec<Animal>, DomainError> {
        Ok(self.table.lock().await.select(|a| a.lifespan >= years))
    }

    async fn save(
        &self,
        id: Option<AnimalId>,
        animal: &NewAnimal,
    ) -> Result<Animal, DomainError> {
        let mut table = self.table.lock().await;
        table.check_constraints(id, animal)?;

        let id = match id {
            Some(id) if table.rows.contains_key(&id) => id,
            Some(id) => return Err(DomainError::not_found("Animal", id)),
            None => {
                let id = table.next_id;
                table.next_id += 1;
                id
            }
        };

        let saved = Animal::from_new(id, animal.clone());
        table.rows.insert(id, saved.clone());
        Ok(saved)
    }

    async fn delete(&self, id: AnimalId) -> Result<bool, DomainError> {
        Ok(self.table.lock().await.rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animal(name: &str, color: &str, lifespan: f64) -> NewAnimal {
        NewAnimal {
            color: color.to_string(),
            name: name.to_string(),
            habitat: "somewhere".to_string(),
            description: "something".to_string(),
            diet: "anything".to_string(),
            lifespan,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_ids_are_assigned_monotonically() {
        let repo = InMemoryAnimalRepository::new();
        let a = repo.save(None, &animal("Fox", "red", 5.0)).await.unwrap();
        let b = repo.save(None, &animal("Owl", "white", 9.0)).await.unwrap();
        repo.delete(b.id).await.unwrap();
        let c = repo.save(None, &animal("Jay", "blue", 7.0)).await.unwrap();

        assert!(a.id < b.id && b.id < c.id);
    }

    #[tokio::test]
    async fn test_duplicate_name_is_conflict() {
        let repo = InMemoryAnimalRepository::new();
        repo.save(None, &animal("Fox", "red", 5.0)).await.unwrap();

        let err = repo.save(None, &animal("Fox", "orange", 3.0)).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_duplicate_scientific_name_is_conflict_but_missing_ones_are_not() {
        let repo = InMemoryAnimalRepository::new();
        let mut fox = animal("Fox", "red", 5.0);
        fox.scientific_name = Some("Vulpes vulpes".to_string());
        repo.save(None, &fox).await.unwrap();
        repo.save(None, &animal("Owl", "white", 9.0)).await.unwrap();
        repo.save(None, &animal("Jay", "blue", 7.0)).await.unwrap();

        let mut twin = animal("Other Fox", "red", 5.0);
        twin.scientific_name = Some("Vulpes vulpes".to_string());
        let err = repo.save(None, &twin).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_negative_lifespan_is_rejected() {
        let repo = InMemoryAnimalRepository::new();
        let err = repo.save(None, &animal("Fox", "red", -1.0)).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_keeps_own_name_without_conflict() {
        let repo = InMemoryAnimalRepository::new();
        let fox = repo.save(None, &animal("Fox", "red", 5.0)).await.unwrap();

        let updated = repo.save(Some(fox.id), &animal("Fox", "grey", 6.0)).await.unwrap();
        assert_eq!(updated.id, fox.id);
        assert_eq!(updated.color, "grey");
    }

    #[tokio::test]
    async fn test_update_of_missing_row_is_not_found() {
        let repo = InMemoryAnimalRepository::new();
        let err = repo.save(Some(99), &animal("Fox", "red", 5.0)).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert_eq!(repo.len().await, 0);
    }

    #[tokio::test]
    async fn test_queries_ignore_case() {
        let repo = InMemoryAnimalRepository::new();
        repo.save(None, &animal("Red Fox", "Red", 5.0)).await.unwrap();
        repo.save(None, &animal("Red Panda", "red", 8.0)).await.unwrap();
        repo.save(None, &animal("Blue Jay", "blue", 7.0)).await.unwrap();

        assert_eq!(repo.find_by_color_ignore_case("RED").await.unwrap().len(), 2);
        assert_eq!(
            repo.find_by_name_containing_ignore_case("RED ").await.unwrap().len(),
            2
        );
        let panda = repo.find_by_name_ignore_case("red panda").await.unwrap();
        assert_eq!(panda.map(|a| a.name), Some("Red Panda".to_string()));
        assert_eq!(repo.find_by_min_lifespan(7.0).await.unwrap().len(), 2);
    }
}
