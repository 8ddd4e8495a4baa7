//! Remote answer client trait and its typed failure outcome

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Why a remote call produced no usable answer.
///
/// `Transport` and `Timeout` mean the call never completed; `Status` and `Malformed` mean
/// it completed with something that is not an answer. The dispatcher recovers from all of
/// them the same way.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RemoteError {
    /// Connectivity, DNS, connection reset
    #[error("transport failure: {0}")]
    Transport(String),

    /// No response within the time bound
    #[error("no response within {0:?}")]
    Timeout(Duration),

    /// Response with a non-success status
    #[error("answer service returned HTTP {status}")]
    Status { status: u16, body: String },

    /// Body is not `{"answer": "<text>"}` or the answer is empty
    #[error("malformed answer payload: {0}")]
    Malformed(String),
}

impl RemoteError {
    /// Short label for log fields
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Timeout(_) => "timeout",
            Self::Status { .. } => "status",
            Self::Malformed(_) => "malformed",
        }
    }
}

/// Network boundary to the remote answer service
///
/// Implementations:
/// - `HttpAnswerClient`: JSON over HTTP to `POST /api/ask`
#[async_trait]
pub trait RemoteAnswerClient: Send + Sync {
    /// Submit a question; returns the answer text or why there is none
    async fn ask(&self, question: &str) -> Result<String, RemoteError>;

    /// Client name for logging
    fn name(&self) -> &str;
}
