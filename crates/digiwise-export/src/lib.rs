//! digiwise-export
//!
//! Plain-text results reports rendered from Tera templates.

pub mod error;
pub mod render;
