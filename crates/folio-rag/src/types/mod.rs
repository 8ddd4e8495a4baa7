//! Core types for the answer pipeline

pub mod query;
pub mod response;

pub use query::{AskRequest, AskResponse};
pub use response::{AnswerSource, QueryResult};
