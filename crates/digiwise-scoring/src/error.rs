use thiserror::Error;

/// Every way an answer set or configuration can be rejected.
///
/// These are caller or configuration bugs, not transient conditions;
/// none of them is retried and any of them prevents a result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("incomplete answer set: no answer for questions {missing:?}")]
    IncompleteAnswerSet { missing: Vec<u32> },

    #[error("invalid weight configuration: {0}")]
    InvalidWeightConfiguration(String),

    #[error("invalid threshold configuration: {0}")]
    InvalidThresholdConfiguration(String),

    #[error("question {question_id} belongs to unknown category '{category}'")]
    UnknownCategory { question_id: u32, category: String },

    #[error("unknown question: {0}")]
    UnknownQuestion(u32),

    #[error("duplicate answer for question {0}")]
    DuplicateAnswer(u32),

    #[error("catalog defines question {0} more than once")]
    DuplicateQuestion(u32),

    #[error("catalog defines category '{0}' more than once")]
    DuplicateCategory(String),

    #[error("answer {value} for question {question_id} is outside range [0, {max_value}]")]
    AnswerOutOfRange {
        question_id: u32,
        value: u8,
        max_value: u8,
    },

    #[error("category '{0}' has no scorable questions")]
    EmptyCategory(String),

    #[error("no category scores to aggregate")]
    NoCategories,

    #[error("score {0} is outside range [0, 100]")]
    ScoreOutOfRange(u8),
}
