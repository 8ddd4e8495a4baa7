//! Keyword matcher over a knowledge base

use std::sync::Arc;

use super::KnowledgeBase;
use crate::error::{Error, Result};
use crate::types::{AnswerSource, QueryResult};

/// Outcome of a local lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalAnswer<'a> {
    /// An entry matched; `entry_index` is its position in the knowledge base
    Matched { entry_index: usize, answer: &'a str },
    /// Nothing matched; the configured default answer
    Default(&'a str),
}

impl<'a> LocalAnswer<'a> {
    pub fn answer(&self) -> &'a str {
        match self {
            Self::Matched { answer, .. } => *answer,
            Self::Default(answer) => *answer,
        }
    }

    /// `Local` for an entry hit, `Fallback` for the default answer
    pub fn source(&self) -> AnswerSource {
        match self {
            Self::Matched { .. } => AnswerSource::Local,
            Self::Default(_) => AnswerSource::Fallback,
        }
    }

    pub fn into_result(self) -> QueryResult {
        QueryResult::new(self.answer(), self.source())
    }
}

/// Answers a question from a knowledge base, or with the default answer.
///
/// Pure and deterministic: the question is lowercased, entries are scanned in
/// declaration order, and the first entry with any alias occurring as a substring of the
/// question wins. There is no scoring, so a short alias on an early entry beats a more
/// specific alias on a later one.
#[derive(Debug, Clone)]
pub struct LocalMatcher {
    knowledge: Arc<KnowledgeBase>,
    default_answer: String,
}

impl LocalMatcher {
    /// Create a matcher. The default answer must not be blank.
    pub fn new(knowledge: Arc<KnowledgeBase>, default_answer: impl Into<String>) -> Result<Self> {
        let default_answer = default_answer.into();
        if default_answer.trim().is_empty() {
            return Err(Error::config("default fallback answer is empty"));
        }
        Ok(Self {
            knowledge,
            default_answer,
        })
    }

    /// Look up the answer for `question`
    pub fn find_answer(&self, question: &str) -> LocalAnswer<'_> {
        let normalized = question.to_lowercase();

        self.knowledge
            .entries()
            .iter()
            .enumerate()
            .find(|(_, entry)| entry.matches(&normalized))
            .map(|(entry_index, entry)| LocalAnswer::Matched {
                entry_index,
                answer: entry.answer(),
            })
            .unwrap_or(LocalAnswer::Default(self.default_answer.as_str()))
    }

    /// Shorthand for `find_answer(question).answer()`
    pub fn answer_for(&self, question: &str) -> &str {
        self.find_answer(question).answer()
    }

    pub fn knowledge(&self) -> &Arc<KnowledgeBase> {
        &self.knowledge
    }

    pub fn default_answer(&self) -> &str {
        &self.default_answer
    }
}
