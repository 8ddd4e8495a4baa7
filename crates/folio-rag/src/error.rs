//! Error types for the answer pipeline and answer service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::providers::RemoteError;

/// Result type alias for folio-rag operations
pub type Result<T> = std::result::Result<T, Error>;

/// folio-rag errors
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error (invalid knowledge base, bad address, ...)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Remote call could not be completed
    #[error("Transport error: {0}")]
    Transport(String),

    /// Remote call completed with an unusable response
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Remote call exceeded its time bound
    #[error("Timed out after {0}ms")]
    Timeout(u64),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML config parse error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// HTTP client error
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a protocol error
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol(message.into())
    }
}

impl From<RemoteError> for Error {
    fn from(err: RemoteError) -> Self {
        match err {
            RemoteError::Transport(msg) => Error::Transport(msg),
            RemoteError::Timeout(after) => {
                Error::Timeout(u64::try_from(after.as_millis()).unwrap_or(u64::MAX))
            }
            other @ (RemoteError::Status { .. } | RemoteError::Malformed(_)) => {
                Error::Protocol(other.to_string())
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            Error::Config(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error", msg.clone()),
            Error::Transport(msg) => (StatusCode::BAD_GATEWAY, "transport_error", msg.clone()),
            Error::Protocol(msg) => (StatusCode::BAD_GATEWAY, "protocol_error", msg.clone()),
            Error::Timeout(_) => (StatusCode::GATEWAY_TIMEOUT, "timeout", self.to_string()),
            Error::Io(err) => (StatusCode::INTERNAL_SERVER_ERROR, "io_error", err.to_string()),
            Error::Json(err) => (StatusCode::BAD_REQUEST, "json_error", err.to_string()),
            Error::Toml(err) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error", err.to_string()),
            Error::Http(err) => (StatusCode::BAD_GATEWAY, "http_error", err.to_string()),
        };

        let body = Json(json!({
            "error": {
                "type": error_type,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_remote_error_maps_to_taxonomy() {
        let transport: Error = RemoteError::Transport("connection refused".into()).into();
        assert!(matches!(transport, Error::Transport(_)));

        let status: Error = RemoteError::Status {
            status: 503,
            body: String::new(),
        }
        .into();
        assert!(matches!(status, Error::Protocol(_)));

        let malformed: Error = RemoteError::Malformed("missing field `answer`".into()).into();
        assert!(matches!(malformed, Error::Protocol(_)));

        let timeout: Error = RemoteError::Timeout(Duration::from_millis(250)).into();
        assert!(matches!(timeout, Error::Timeout(250)));

        let huge: Error = RemoteError::Timeout(Duration::MAX).into();
        assert!(matches!(huge, Error::Timeout(u64::MAX)));
    }

    #[test]
    fn test_error_response_status() {
        let res = Error::config("duplicate alias").into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let res = Error::protocol("bad body").into_response();
        assert_eq!(res.status(), StatusCode::BAD_GATEWAY);

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "folio.toml");
        let res = Error::from(io).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
