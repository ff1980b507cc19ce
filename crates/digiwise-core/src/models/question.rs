use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Highest ordinal on the standard 0–4 answer scale.
pub const DEFAULT_MAX_VALUE: u8 = 4;

/// A named grouping of related questions (e.g. sleep, social media use).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    /// Label referenced by [`Question::category`], e.g. `"social-media"`.
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Category {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
        }
    }
}

/// A single quiz item. Answers are ordinals in `0..=max_value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: u32,
    pub category: String,
    pub prompt: String,
    #[serde(default = "default_max_value")]
    pub max_value: u8,
    /// Inactive questions are retired from the quiz and never scored.
    #[serde(default = "default_active")]
    pub active: bool,
}

impl Question {
    pub fn new(id: u32, category: &str, prompt: &str, max_value: u8) -> Self {
        Self {
            id,
            category: category.to_string(),
            prompt: prompt.to_string(),
            max_value,
            active: true,
        }
    }

    pub fn accepts(&self, value: u8) -> bool {
        value <= self.max_value
    }
}

fn default_max_value() -> u8 {
    DEFAULT_MAX_VALUE
}

fn default_active() -> bool {
    true
}
