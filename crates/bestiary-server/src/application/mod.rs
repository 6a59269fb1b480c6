//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and storage.

mod animal_service;
mod image_service;

pub use animal_service::AnimalService;
pub use image_service::ImageService;
