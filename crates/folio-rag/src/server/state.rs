//! Application state for the answer service

use std::sync::Arc;

use crate::config::FolioConfig;
use crate::error::Result;
use crate::knowledge::{KnowledgeBase, LocalMatcher};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Matcher over the service knowledge base
    matcher: LocalMatcher,
}

impl AppState {
    /// Build state from the `answer_service` section
    pub fn new(config: &FolioConfig) -> Result<Self> {
        let knowledge = KnowledgeBase::from_config(&config.answer_service.entries)?;
        let matcher = LocalMatcher::new(
            Arc::new(knowledge),
            config.answer_service.default_answer.clone(),
        )?;
        tracing::info!(
            "Answer service knowledge base loaded ({} rules)",
            matcher.knowledge().len()
        );
        Ok(Self::from_matcher(matcher))
    }

    pub fn from_matcher(matcher: LocalMatcher) -> Self {
        Self {
            inner: Arc::new(AppStateInner { matcher }),
        }
    }

    pub fn matcher(&self) -> &LocalMatcher {
        &self.inner.matcher
    }
}
