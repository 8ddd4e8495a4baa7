//! folio-rag: question answering for the portfolio chat widget
//!
//! Questions are first sent to the remote answer service. When that call fails for any
//! reason the question is answered locally by keyword-matching it against a small static
//! knowledge base, so every question gets an answer.
//!
//! The crate also ships the answer service itself (`server`), which answers from its own
//! knowledge base with the same matcher.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod knowledge;
pub mod providers;
pub mod server;
pub mod types;

pub use config::FolioConfig;
pub use dispatch::QueryDispatcher;
pub use error::{Error, Result};
pub use knowledge::{KnowledgeBase, KnowledgeEntry, LocalAnswer, LocalMatcher};
pub use providers::{HttpAnswerClient, RemoteAnswerClient, RemoteError};
pub use server::AnswerServer;
pub use types::{AnswerSource, AskRequest, AskResponse, QueryResult};
