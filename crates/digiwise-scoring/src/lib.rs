//! digiwise-scoring
//!
//! The authoritative scoring engine for the DigiWise assessment. Pure
//! computation: answers and a catalog in, a classified result out. Also
//! holds the catalog definitions, the per-examinee session object,
//! recommended actions and the admin dashboard aggregation.

pub mod catalogs;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod recommendations;
pub mod scoring;
pub mod session;

use digiwise_core::models::answer::Answer;
use digiwise_core::models::question::{Category, Question};
use digiwise_core::models::result::AssessmentResult;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Trait implemented by each question catalog an examinee can take.
pub trait Catalog: Send + Sync {
    /// Unique identifier (e.g., "digital_wellness").
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// The categories this catalog scores, in display order.
    fn categories(&self) -> &[Category];

    /// Every question, including retired ones.
    fn questions(&self) -> &[Question];

    /// Questions an examinee must answer.
    fn active_questions(&self) -> Vec<&Question> {
        self.questions().iter().filter(|q| q.active).collect()
    }

    fn question(&self, id: u32) -> Option<&Question> {
        self.questions().iter().find(|q| q.id == id)
    }

    fn category(&self, id: &str) -> Option<&Category> {
        self.categories().iter().find(|c| c.id == id)
    }

    /// Report every answer that could not be scored, without failing.
    /// Meant for form feedback; scoring itself rejects on the first problem.
    fn validate_answers(&self, answers: &[Answer]) -> Vec<AnswerIssue> {
        answers
            .iter()
            .filter_map(|answer| {
                let question = self.question(answer.question_id).filter(|q| q.active);
                let message = match question {
                    None => format!(
                        "{}: question {} does not exist",
                        self.name(),
                        answer.question_id
                    ),
                    Some(q) if !q.accepts(answer.value) => format!(
                        "{}: answer {} to question {} is outside range [0, {}]",
                        self.name(),
                        answer.value,
                        q.id,
                        q.max_value,
                    ),
                    Some(q) if self.category(&q.category).is_none() => format!(
                        "{}: question {} belongs to unknown category '{}'",
                        self.name(),
                        q.id,
                        q.category,
                    ),
                    Some(_) => return None,
                };
                Some(AnswerIssue {
                    question_id: answer.question_id,
                    value: answer.value,
                    max_value: question.map(|q| q.max_value),
                    message,
                })
            })
            .collect()
    }

    /// Format a result as structured text, one section per category.
    fn to_structured_input(&self, result: &AssessmentResult) -> String {
        let mut output = format!("## {}\n\n", self.name());
        output.push_str(&format!(
            "Overall: {}% ({})\n\n",
            result.overall_score, result.risk_level
        ));
        for category in self.categories() {
            if let Some(score) = result.category_scores.get(&category.id) {
                output.push_str(&format!("### {}\n- {}%\n\n", category.name, score));
            }
        }
        output
    }
}

/// A single problem found by [`Catalog::validate_answers`].
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct AnswerIssue {
    pub question_id: u32,
    pub value: u8,
    pub max_value: Option<u8>,
    pub message: String,
}

/// Return all built-in catalogs.
pub fn all_catalogs() -> Vec<Box<dyn Catalog>> {
    vec![Box::new(catalogs::digital_wellness::DigitalWellness)]
}

/// Look up a built-in catalog by ID.
pub fn get_catalog(id: &str) -> Option<Box<dyn Catalog>> {
    all_catalogs().into_iter().find(|c| c.id() == id)
}
