pub mod digital_wellness;

use digiwise_core::models::question::{Category, Question};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::Catalog;
use crate::error::ScoringError;
use crate::scoring::validate_catalog;

/// An owned catalog, typically loaded from JSON supplied by the
/// assessment administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionCatalog {
    pub id: String,
    pub name: String,
    pub categories: Vec<Category>,
    pub questions: Vec<Question>,
}

impl QuestionCatalog {
    pub fn new(id: &str, name: &str, categories: Vec<Category>, questions: Vec<Question>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            categories,
            questions,
        }
    }

    /// Snapshot any catalog, e.g. to serialize a built-in one.
    pub fn from_catalog(catalog: &dyn Catalog) -> Self {
        Self {
            id: catalog.id().to_string(),
            name: catalog.name().to_string(),
            categories: catalog.categories().to_vec(),
            questions: catalog.questions().to_vec(),
        }
    }

    /// Reject repeated question or category ids.
    pub fn validate(&self) -> Result<(), ScoringError> {
        validate_catalog(self)
    }
}

impl Catalog for QuestionCatalog {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn categories(&self) -> &[Category] {
        &self.categories
    }

    fn questions(&self) -> &[Question] {
        &self.questions
    }
}
