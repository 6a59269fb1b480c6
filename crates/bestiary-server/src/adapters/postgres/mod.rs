//! PostgreSQL Repository Implementations

mod animal_repository;

pub use animal_repository::PgAnimalRepository;
