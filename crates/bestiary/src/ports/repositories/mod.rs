//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod animal_repository;

pub use animal_repository::*;
