//! PostgreSQL implementation of AnimalRepository

use async_trait::async_trait;
use sqlx::{error::ErrorKind, PgPool};

use bestiary::{Animal, AnimalId, AnimalRepository, DomainError, NewAnimal};

/// PostgreSQL implementation of AnimalRepository
pub struct PgAnimalRepository {
    pool: PgPool,
}

impl PgAnimalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct AnimalRow {
    animal_id: i64,
    color: String,
    name: String,
    scientific_name: Option<String>,
    habitat: String,
    description: String,
    diet: String,
    lifespan: f64,
    fun_facts: Vec<String>,
    image_url: Option<String>,
}

impl From<AnimalRow> for Animal {
    fn from(row: AnimalRow) -> Self {
        Self {
            id: row.animal_id,
            color: row.color,
            name: row.name,
            scientific_name: row.scientific_name,
            habitat: row.habitat,
            description: row.description,
            diet: row.diet,
            lifespan: row.lifespan,
            fun_facts: row.fun_facts,
            image_url: row.image_url,
        }
    }
}

/// Constraint violations become domain errors the HTTP layer can tell apart
fn map_db_error(e: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db) = &e {
        match db.kind() {
            ErrorKind::UniqueViolation => return DomainError::Conflict(db.message().to_string()),
            ErrorKind::CheckViolation | ErrorKind::NotNullViolation => {
                return DomainError::Validation(db.message().to_string())
            }
            _ => {}
        }
    }
    DomainError::Repository(e.to_string())
}

/// `ILIKE` pattern matching `fragment` anywhere, with wildcards in it taken literally
fn contains_pattern(fragment: &str) -> String {
    let mut pattern = String::with_capacity(fragment.len() + 2);
    pattern.push('%');
    for c in fragment.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl AnimalRepository for PgAnimalRepository {
    async fn find_all(&self) -> Result<Vec<Animal>, DomainError> {
        let rows = sqlx::query_as::<_, AnimalRow>("SELECT * FROM animals ORDER BY animal_id")
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: AnimalId) -> Result<Option<Animal>, DomainError> {
        let row = sqlx::query_as::<_, AnimalRow>("SELECT * FROM animals WHERE animal_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(row.map(Into::into))
    }

    async fn find_by_color_ignore_case(&self, color: &str) -> Result<Vec<Animal>, DomainError> {
        let rows = sqlx::query_as::<_, AnimalRow>(
            "SELECT * FROM animals WHERE LOWER(color) = LOWER($1) ORDER BY animal_id",
        )
        .bind(color)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_name_ignore_case(&self, name: &str) -> Result<Option<Animal>, DomainError> {
        let row = sqlx::query_as::<_, AnimalRow>(
            "SELECT * FROM animals WHERE LOWER(name) = LOWER($1) ORDER BY animal_id LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.map(Into::into))
    }

    async fn find_by_name_containing_ignore_case(
        &self,
        fragment: &str,
    ) -> Result<Vec<Animal>, DomainError> {
        let rows = sqlx::query_as::<_, AnimalRow>(
            r"SELECT * FROM animals WHERE name ILIKE $1 ESCAPE '\' ORDER BY animal_id",
        )
        .bind(contains_pattern(fragment))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_min_lifespan(&self, years: f64) -> Result<Vec<Animal>, DomainError> {
        let rows = sqlx::query_as::<_, AnimalRow>(
            "SELECT * FROM animals WHERE lifespan >= $1 ORDER BY animal_id",
        )
        .bind(years)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn save(
        &self,
        id: Option<AnimalId>,
        animal: &NewAnimal,
    ) -> Result<Animal, DomainError> {
        let row = match id {
            // Update
            Some(id) => sqlx::query_as::<_, AnimalRow>(
                r#"
                UPDATE animals
                SET color = $2, name = $3, scientific_name = $4, habitat = $5,
                    description = $6, diet = $7, lifespan = $8, fun_facts = $9,
                    image_url = $10
                WHERE animal_id = $1
                RETURNING *
                "#,
            )
            .bind(id)
            .bind(&animal.color)
            .bind(&animal.name)
            .bind(&animal.scientific_name)
            .bind(&animal.habitat)
            .bind(&animal.description)
            .bind(&animal.diet)
            .bind(animal.lifespan)
            .bind(&animal.fun_facts)
            .bind(&animal.image_url)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?
            .ok_or_else(|| DomainError::not_found("Animal", id))?,
            // Insert
            None => sqlx::query_as::<_, AnimalRow>(
                r#"
                INSERT INTO animals
                    (color, name, scientific_name, habitat, description, diet,
                     lifespan, fun_facts, image_url)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                RETURNING *
                "#,
            )
            .bind(&animal.color)
            .bind(&animal.name)
            .bind(&animal.scientific_name)
            .bind(&animal.habitat)
            .bind(&animal.description)
            .bind(&animal.diet)
            .bind(animal.lifespan)
            .bind(&animal.fun_facts)
            .bind(&animal.image_url)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?,
        };

        Ok(row.into())
    }

    async fn delete(&self, id: AnimalId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM animals WHERE animal_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_pattern_wraps_fragment() {
        assert_eq!(contains_pattern("fox"), "%fox%");
        assert_eq!(contains_pattern(""), "%%");
    }

    #[test]
    fn test_contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("100%"), r"%100\%%");
        assert_eq!(contains_pattern("red_fox"), r"%red\_fox%");
        assert_eq!(contains_pattern(r"a\b"), r"%a\\b%");
    }

    #[test]
    fn test_non_database_errors_are_repository_errors() {
        let err = map_db_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, DomainError::Repository(_)));
    }
}
