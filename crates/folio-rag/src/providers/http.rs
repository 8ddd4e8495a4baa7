//! HTTP client for the answer service

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::remote::{RemoteAnswerClient, RemoteError};
use crate::config::RemoteConfig;
use crate::error::{Error, Result};
use crate::types::{AskRequest, AskResponse};

const ASK_PATH: &str = "/api/ask";

/// Posts `{"question": ...}` to `{base_url}/api/ask` and expects `{"answer": ...}` back.
///
/// One attempt per call; retries would delay the local fallback.
pub struct HttpAnswerClient {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpAnswerClient {
    /// Create a client from configuration
    pub fn new(config: &RemoteConfig) -> Result<Self> {
        Self::with_timeout(&config.base_url, config.timeout())
    }

    /// Create a client for `base_url` with an explicit request timeout.
    ///
    /// A zero timeout is rejected: every request would fail and every question would
    /// silently be answered locally.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        if timeout.is_zero() {
            return Err(Error::config("remote timeout must be greater than zero"));
        }

        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(5)
            .build()?;

        Ok(Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), ASK_PATH),
            timeout,
        })
    }

    /// Full URL questions are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn transport_error(&self, err: reqwest::Error) -> RemoteError {
        if err.is_timeout() {
            RemoteError::Timeout(self.timeout)
        } else {
            RemoteError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl RemoteAnswerClient for HttpAnswerClient {
    async fn ask(&self, question: &str) -> std::result::Result<String, RemoteError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&AskRequest::new(question))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(|e| self.transport_error(e))?;
        let parsed: AskResponse = serde_json::from_slice(&bytes)
            .map_err(|e| RemoteError::Malformed(e.to_string()))?;

        Ok(parsed.answer)
    }

    fn name(&self) -> &str {
        "http"
    }
}
