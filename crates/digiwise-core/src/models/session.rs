use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::result::AssessmentResult;
use crate::error::CoreError;

/// A scored session as handed to the persistence layer.
/// `session_id` is the unique key; a session is stored at most once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionResult {
    pub session_id: Uuid,
    pub catalog_id: String,
    pub result: AssessmentResult,
    pub started_at: jiff::Timestamp,
    pub completed_at: jiff::Timestamp,
}

impl SessionResult {
    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}
