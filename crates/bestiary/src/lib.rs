//! Bestiary Domain Library
//!
//! Core domain types and interfaces for the Bestiary animal catalog.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure entities and logic
//!   - `entities/`: The `Animal` record and its unsaved form `NewAnimal`
//!   - `value_objects/`: Immutable value types (`StoredImageName`)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Animal persistence
//!   - `services/`: Image file storage
//!
//! # Usage
//!
//! ```rust,ignore
//! use bestiary::{Animal, NewAnimal, AnimalRepository, ImageStore};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{Animal, AnimalId, DomainError, NewAnimal, StoredImageName};
pub use ports::{AnimalRepository, ImageStore};
