//! Value Objects
//!
//! Immutable types that represent domain concepts.

mod stored_image_name;

pub use stored_image_name::*;
