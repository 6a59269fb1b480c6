//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod image_store;
#[cfg(test)]
pub mod memory;
pub mod postgres;

// Re-exports
pub use image_store::FsImageStore;
#[cfg(test)]
pub use memory::InMemoryAnimalRepository;
pub use postgres::PgAnimalRepository;
