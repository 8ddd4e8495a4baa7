//! Wire types for the answer service (`POST /api/ask`)

use serde::{Deserialize, Serialize};

/// Question submitted to the answer service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    /// Free-text user question. A missing field is read as an empty question.
    #[serde(default)]
    pub question: String,
}

impl AskRequest {
    /// Create a new request
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }
}

/// Answer returned by the answer service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    /// Answer text, may contain `**bold**` markup
    pub answer: String,
}

impl AskResponse {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
        }
    }
}
