//! Domain Entities
//!
//! - Animal: one catalog entry, identified by a store-assigned id
//! - NewAnimal: the field set of an Animal before the store assigns its id

mod animal;

pub use animal::*;
