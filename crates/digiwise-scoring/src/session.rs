//! One examinee's attempt at a catalog, from start to submission.
//!
//! The session is an explicit value owned by the caller. Submitting
//! consumes it, so a session can produce at most one result.

use std::collections::BTreeMap;

use digiwise_core::models::answer::Answer;
use digiwise_core::models::session::SessionResult;
use uuid::Uuid;

use crate::Catalog;
use crate::config::ScoringConfig;
use crate::error::ScoringError;
use crate::scoring::{resolve_answer, score};

pub struct AssessmentSession<'a> {
    id: Uuid,
    catalog: &'a dyn Catalog,
    answers: BTreeMap<u32, u8>,
    started_at: jiff::Timestamp,
}

impl<'a> AssessmentSession<'a> {
    pub fn start(catalog: &'a dyn Catalog) -> Self {
        let id = Uuid::new_v4();
        tracing::debug!(session = %id, catalog = catalog.id(), "assessment session started");
        Self {
            id,
            catalog,
            answers: BTreeMap::new(),
            started_at: jiff::Timestamp::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn catalog(&self) -> &dyn Catalog {
        self.catalog
    }

    pub fn started_at(&self) -> jiff::Timestamp {
        self.started_at
    }

    /// Record an answer, replacing any earlier answer to the same question.
    /// Returns the replaced value.
    pub fn record(&mut self, answer: Answer) -> Result<Option<u8>, ScoringError> {
        resolve_answer(self.catalog, &answer)?;
        Ok(self.answers.insert(answer.question_id, answer.value))
    }

    pub fn answers(&self) -> Vec<Answer> {
        self.answers
            .iter()
            .map(|(question_id, value)| Answer::new(*question_id, *value))
            .collect()
    }

    /// Active questions not answered yet, in catalog order.
    pub fn missing_questions(&self) -> Vec<u32> {
        self.catalog
            .active_questions()
            .iter()
            .map(|q| q.id)
            .filter(|id| !self.answers.contains_key(id))
            .collect()
    }

    /// `(answered, total)` over the catalog's active questions.
    pub fn progress(&self) -> (usize, usize) {
        let total = self.catalog.active_questions().len();
        (total - self.missing_questions().len(), total)
    }

    pub fn is_complete(&self) -> bool {
        self.missing_questions().is_empty()
    }

    /// Score the session. Consumes it: a session yields one result.
    pub fn submit(self, config: &ScoringConfig) -> Result<SessionResult, ScoringError> {
        let missing = self.missing_questions();
        if !missing.is_empty() {
            return Err(ScoringError::IncompleteAnswerSet { missing });
        }

        let result = score(&self.answers(), self.catalog, config)?;
        tracing::info!(
            session = %self.id,
            catalog = self.catalog.id(),
            risk_level = %result.risk_level,
            "assessment session submitted"
        );

        Ok(SessionResult {
            session_id: self.id,
            catalog_id: self.catalog.id().to_string(),
            result,
            started_at: self.started_at,
            completed_at: jiff::Timestamp::now(),
        })
    }
}
