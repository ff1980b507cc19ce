use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// An examinee's selected ordinal for one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Answer {
    #[serde(alias = "questionId")]
    pub question_id: u32,
    pub value: u8,
}

impl Answer {
    pub fn new(question_id: u32, value: u8) -> Self {
        Self { question_id, value }
    }
}

/// Answer payload as submitted by a client: either a bare list or an
/// object wrapping it under `answers`.
#[derive(Deserialize)]
#[serde(untagged)]
enum AnswerPayload {
    List(Vec<Answer>),
    Wrapped { answers: Vec<Answer> },
}

/// Parse a submitted answer set. Accepts both `snake_case` and the
/// browser client's `questionId` field name.
pub fn parse_answers(json: &str) -> Result<Vec<Answer>, CoreError> {
    let payload: AnswerPayload = serde_json::from_str(json)?;
    Ok(match payload {
        AnswerPayload::List(answers) | AnswerPayload::Wrapped { answers } => answers,
    })
}
