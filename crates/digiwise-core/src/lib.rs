//! digiwise-core
//!
//! Pure domain types for the DigiWise assessment: questions, answers,
//! results and the records handed to the persistence layer.
//! No scoring logic lives here; this is the shared vocabulary.

pub mod error;
pub mod models;
