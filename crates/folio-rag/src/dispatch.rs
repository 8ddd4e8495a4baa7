//! Answer resolution: remote answer service first, local knowledge base on any failure

use std::sync::Arc;
use std::time::Duration;

use crate::config::FolioConfig;
use crate::error::Result;
use crate::knowledge::{KnowledgeBase, LocalMatcher};
use crate::providers::{HttpAnswerClient, RemoteAnswerClient, RemoteError};
use crate::types::QueryResult;

/// Resolves questions into answers, always producing one.
///
/// Each `resolve` makes at most one remote attempt, bounded by `remote_timeout`. Any
/// failure (transport, timeout, non-success status, malformed or empty answer) falls back
/// to the local matcher. Calls share nothing but the read-only knowledge base, so the
/// dispatcher can be cloned freely and used from concurrent tasks.
#[derive(Clone)]
pub struct QueryDispatcher {
    remote: Option<Arc<dyn RemoteAnswerClient>>,
    matcher: LocalMatcher,
    remote_timeout: Duration,
}

impl QueryDispatcher {
    /// Create a dispatcher over a remote client and a local matcher
    pub fn new(
        remote: Arc<dyn RemoteAnswerClient>,
        matcher: LocalMatcher,
        remote_timeout: Duration,
    ) -> Self {
        Self {
            remote: Some(remote),
            matcher,
            remote_timeout,
        }
    }

    /// Dispatcher without a remote service; every question is answered locally
    pub fn local_only(matcher: LocalMatcher) -> Self {
        Self {
            remote: None,
            matcher,
            remote_timeout: Duration::ZERO,
        }
    }

    /// Build the widget pipeline: HTTP client from `remote`, matcher from `assistant`
    pub fn from_config(config: &FolioConfig) -> Result<Self> {
        let matcher = Self::matcher_from_config(config)?;
        let remote = Arc::new(HttpAnswerClient::new(&config.remote)?);
        tracing::info!(
            "Query dispatcher ready (remote: {}, timeout: {:?}, local entries: {})",
            remote.endpoint(),
            config.remote.timeout(),
            matcher.knowledge().len()
        );
        Ok(Self::new(remote, matcher, config.remote.timeout()))
    }

    /// Build a local-only pipeline from the `assistant` section
    pub fn local_from_config(config: &FolioConfig) -> Result<Self> {
        Ok(Self::local_only(Self::matcher_from_config(config)?))
    }

    fn matcher_from_config(config: &FolioConfig) -> Result<LocalMatcher> {
        let knowledge = KnowledgeBase::from_config(&config.assistant.entries)?;
        LocalMatcher::new(Arc::new(knowledge), config.assistant.fallback_answer.clone())
    }

    /// Resolve a question. Never fails and never returns an empty answer.
    pub async fn resolve(&self, question: &str) -> QueryResult {
        let Some(remote) = self.remote.as_deref() else {
            return self.resolve_locally(question);
        };

        match self.ask_remote(remote, question).await {
            Ok(answer) => {
                tracing::debug!(client = remote.name(), "Answered by remote service");
                QueryResult::remote(answer)
            }
            Err(err) => {
                tracing::warn!(
                    client = remote.name(),
                    kind = err.kind(),
                    "Answer service unavailable, using local knowledge base: {}",
                    err
                );
                self.resolve_locally(question)
            }
        }
    }

    /// Answer from the local knowledge base only
    pub fn resolve_locally(&self, question: &str) -> QueryResult {
        let local = self.matcher.find_answer(question);
        tracing::debug!(source = %local.source(), "Answered locally");
        local.into_result()
    }

    pub fn matcher(&self) -> &LocalMatcher {
        &self.matcher
    }

    async fn ask_remote(
        &self,
        remote: &dyn RemoteAnswerClient,
        question: &str,
    ) -> std::result::Result<String, RemoteError> {
        let answer = tokio::time::timeout(self.remote_timeout, remote.ask(question))
            .await
            .map_err(|_| RemoteError::Timeout(self.remote_timeout))??;

        if answer.trim().is_empty() {
            return Err(RemoteError::Malformed("answer is empty".to_string()));
        }
        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::KnowledgeEntry;
    use crate::types::AnswerSource;
    use async_trait::async_trait;
    use proptest::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Remote that always returns the same outcome and counts calls
    struct StubRemote {
        outcome: std::result::Result<String, RemoteError>,
        calls: AtomicUsize,
    }

    impl StubRemote {
        fn new(outcome: std::result::Result<String, RemoteError>) -> Arc<Self> {
            Arc::new(Self {
                outcome,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl RemoteAnswerClient for StubRemote {
        async fn ask(&self, _question: &str) -> std::result::Result<String, RemoteError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone()
        }

        fn name(&self) -> &str {
            "stub"
        }
    }

    /// Remote that never answers in time
    struct HangingRemote;

    #[async_trait]
    impl RemoteAnswerClient for HangingRemote {
        async fn ask(&self, _question: &str) -> std::result::Result<String, RemoteError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok("too late".to_string())
        }

        fn name(&self) -> &str {
            "hanging"
        }
    }

    fn scenario_matcher() -> LocalMatcher {
        let kb = KnowledgeBase::new(vec![
            KnowledgeEntry::new(["services", "what can you do"], "A").unwrap(),
            KnowledgeEntry::new(["contact", "hire you"], "B").unwrap(),
        ])
        .unwrap();
        LocalMatcher::new(Arc::new(kb), "C").unwrap()
    }

    fn dispatcher(remote: Arc<dyn RemoteAnswerClient>) -> QueryDispatcher {
        QueryDispatcher::new(remote, scenario_matcher(), Duration::from_secs(5))
    }

    fn failures() -> Vec<RemoteError> {
        vec![
            RemoteError::Transport("connection refused".to_string()),
            RemoteError::Timeout(Duration::from_secs(10)),
            RemoteError::Status {
                status: 503,
                body: "unavailable".to_string(),
            },
            RemoteError::Malformed("missing field `answer`".to_string()),
        ]
    }

    #[tokio::test]
    async fn test_remote_precedence() {
        let remote = StubRemote::new(Ok("**Remote** answer".to_string()));
        let d = dispatcher(remote.clone());

        // matches locally too, but the remote answer wins untouched
        let result = d.resolve("services").await;
        assert_eq!(result, QueryResult::new("**Remote** answer", AnswerSource::Remote));
        assert_eq!(remote.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_remote_failure_falls_back_to_local_match() {
        for err in failures() {
            let d = dispatcher(StubRemote::new(Err(err.clone())));
            let result = d.resolve("services").await;
            assert_eq!(result, QueryResult::new("A", AnswerSource::Local), "{err}");
        }
    }

    #[tokio::test]
    async fn test_remote_failure_without_match_uses_default() {
        let d = dispatcher(StubRemote::new(Err(RemoteError::Transport("dns".into()))));
        assert_eq!(
            d.resolve("xyz").await,
            QueryResult::new("C", AnswerSource::Fallback)
        );
    }

    #[tokio::test]
    async fn test_empty_remote_answer_falls_back() {
        let d = dispatcher(StubRemote::new(Ok("   ".to_string())));
        assert_eq!(
            d.resolve("How can I contact you?").await,
            QueryResult::new("B", AnswerSource::Local)
        );
    }

    #[tokio::test]
    async fn test_hanging_remote_is_bounded() {
        let d = QueryDispatcher::new(
            Arc::new(HangingRemote),
            scenario_matcher(),
            Duration::from_millis(50),
        );
        let result = tokio::time::timeout(Duration::from_secs(5), d.resolve("hire you"))
            .await
            .expect("resolve must finish once the remote bound expires");
        assert_eq!(result, QueryResult::new("B", AnswerSource::Local));
    }

    #[tokio::test]
    async fn test_no_retry_no_cache() {
        let remote = StubRemote::new(Err(RemoteError::Transport("down".into())));
        let d = dispatcher(remote.clone());

        d.resolve("services").await;
        d.resolve("services").await;
        assert_eq!(remote.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_concurrent_calls_are_independent() {
        let d = dispatcher(StubRemote::new(Err(RemoteError::Transport("down".into()))));

        let (a, b, c) = tokio::join!(d.resolve("services"), d.resolve("contact"), d.resolve("?"));
        assert_eq!(a.answer, "A");
        assert_eq!(b.answer, "B");
        assert_eq!(c.answer, "C");
    }

    #[tokio::test]
    async fn test_local_only() {
        let d = QueryDispatcher::local_only(scenario_matcher());
        assert_eq!(
            d.resolve("What can you do?").await,
            QueryResult::new("A", AnswerSource::Local)
        );
    }

    #[test]
    fn test_from_config_builds_default_pipeline() {
        let d = QueryDispatcher::from_config(&FolioConfig::default()).unwrap();
        assert_eq!(d.matcher().knowledge().len(), 4);
    }

    #[test]
    fn test_from_config_rejects_invalid_knowledge() {
        let mut config = FolioConfig::default();
        config.assistant.entries[1].aliases.clear();
        assert!(QueryDispatcher::from_config(&config).is_err());
    }

    #[test]
    fn test_from_config_rejects_zero_timeout() {
        let mut config = FolioConfig::default();
        config.remote.timeout_secs = 0;
        let err = QueryDispatcher::from_config(&config).err().unwrap();
        assert!(matches!(err, crate::error::Error::Config(_)), "{err}");

        // local-only pipelines never call the remote, so the bound is irrelevant there
        assert!(QueryDispatcher::local_from_config(&config).is_ok());
    }

    proptest! {
        #[test]
        fn prop_fallback_equals_direct_match(question in ".{0,60}", which in 0usize..4) {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()
                .unwrap();
            let err = failures().swap_remove(which);
            let d = dispatcher(StubRemote::new(Err(err)));

            let result = rt.block_on(d.resolve(&question));
            let matcher = scenario_matcher();
            let direct = matcher.find_answer(&question);

            prop_assert!(!result.answer.is_empty());
            prop_assert_eq!(result.answer.as_str(), direct.answer());
            prop_assert_eq!(result.source, direct.source());
        }

        #[test]
        fn prop_remote_answer_verbatim(question in ".{0,40}", answer in "[^\\s].{0,40}") {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()
                .unwrap();
            let d = dispatcher(StubRemote::new(Ok(answer.clone())));

            let result = rt.block_on(d.resolve(&question));
            prop_assert_eq!(result, QueryResult::new(answer, AnswerSource::Remote));
        }
    }
}
