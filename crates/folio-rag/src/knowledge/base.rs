//! Validated, immutable knowledge base

use std::collections::HashMap;

use crate::config::KnowledgeEntryConfig;
use crate::error::{Error, Result};

/// One knowledge base entry: trigger phrases and the answer they select
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeEntry {
    /// Lowercased aliases, in configuration order
    aliases: Vec<String>,
    /// Answer text, stored verbatim
    answer: String,
}

impl KnowledgeEntry {
    /// Create an entry, rejecting empty alias sets, blank aliases and blank answers
    pub fn new<I, S>(aliases: I, answer: impl Into<String>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let answer = answer.into();
        let aliases: Vec<String> = aliases
            .into_iter()
            .map(|a| a.as_ref().to_lowercase())
            .collect();

        if aliases.is_empty() {
            return Err(Error::config(format!(
                "knowledge entry has no aliases (answer: {:?})",
                preview(&answer)
            )));
        }
        if let Some(pos) = aliases.iter().position(|a| a.trim().is_empty()) {
            return Err(Error::config(format!(
                "knowledge entry alias #{} is empty (answer: {:?})",
                pos + 1,
                preview(&answer)
            )));
        }
        if answer.trim().is_empty() {
            return Err(Error::config(format!(
                "knowledge entry with aliases {:?} has an empty answer",
                aliases
            )));
        }

        Ok(Self { aliases, answer })
    }

    /// Normalized (lowercased) aliases
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Answer text, markup untouched
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// True if any alias occurs in the already-normalized question
    pub fn matches(&self, normalized_question: &str) -> bool {
        self.aliases
            .iter()
            .any(|alias| normalized_question.contains(alias.as_str()))
    }
}

impl TryFrom<&KnowledgeEntryConfig> for KnowledgeEntry {
    type Error = Error;

    fn try_from(config: &KnowledgeEntryConfig) -> Result<Self> {
        Self::new(&config.aliases, config.answer.clone())
    }
}

/// Ordered, read-only collection of knowledge entries. Order is match priority.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
}

impl KnowledgeBase {
    /// Build from validated entries.
    ///
    /// Fails if the same alias (case-insensitively) is declared twice, whether within one
    /// entry or across entries. An empty list is accepted; every query then falls through
    /// to the default answer.
    pub fn new(entries: Vec<KnowledgeEntry>) -> Result<Self> {
        {
            let mut seen: HashMap<&str, usize> = HashMap::new();
            for (index, entry) in entries.iter().enumerate() {
                for alias in &entry.aliases {
                    if let Some(first) = seen.insert(alias.as_str(), index) {
                        return Err(Error::config(format!(
                            "alias {:?} declared by entry #{} is already declared by entry #{}",
                            alias,
                            index + 1,
                            first + 1
                        )));
                    }
                }
            }
        }

        if entries.is_empty() {
            tracing::warn!("Knowledge base is empty; every local lookup will use the default answer");
        }

        Ok(Self { entries })
    }

    /// Build from configuration records
    pub fn from_config(records: &[KnowledgeEntryConfig]) -> Result<Self> {
        let entries = records
            .iter()
            .map(KnowledgeEntry::try_from)
            .collect::<Result<Vec<_>>>()?;
        Self::new(entries)
    }

    /// Entries in priority order
    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn preview(text: &str) -> String {
    text.chars().take(40).collect()
}
