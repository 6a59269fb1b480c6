//! Service Ports
//!
//! Abstract interfaces for external resources the domain writes to.

mod image_store;

pub use image_store::*;
