//! Bestiary Data Models
//!
//! - Animal: catalog record requests, responses and listing filters
//! - Upload: image upload form and response

mod animal;
mod upload;

pub use animal::*;
pub use upload::*;
