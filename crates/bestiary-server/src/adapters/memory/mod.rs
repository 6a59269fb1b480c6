//! In-memory Repository Implementations

mod animal_repository;

pub use animal_repository::InMemoryAnimalRepository;
