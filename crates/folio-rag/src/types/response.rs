//! Resolved answer types handed to the presenter

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which path produced an answer. Used for logging and tests, never shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerSource {
    /// Answer came from the remote answer service
    Remote,
    /// Remote failed; a local knowledge base entry matched
    Local,
    /// Remote failed and nothing matched; default fallback answer
    Fallback,
}

impl AnswerSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Local => "local",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for AnswerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of resolving one question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Resolved answer text (markup untouched)
    pub answer: String,
    /// Provenance tag
    pub source: AnswerSource,
}

impl QueryResult {
    pub fn new(answer: impl Into<String>, source: AnswerSource) -> Self {
        Self {
            answer: answer.into(),
            source,
        }
    }

    /// Answer produced by the remote service
    pub fn remote(answer: impl Into<String>) -> Self {
        Self::new(answer, AnswerSource::Remote)
    }
}
