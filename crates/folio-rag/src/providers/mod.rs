//! Remote answer service abstraction
//!
//! The dispatcher talks to the answer service through `RemoteAnswerClient`, so tests and
//! alternative transports can stand in for the HTTP client.

pub mod http;
pub mod remote;

pub use http::HttpAnswerClient;
pub use remote::{RemoteAnswerClient, RemoteError};
