//! Static knowledge base and the keyword matcher that answers from it
//!
//! A knowledge base is an ordered list of entries, each mapping a set of trigger phrases
//! (aliases) to an answer. Matching is a case-insensitive substring test and the first
//! entry in declaration order with any hit wins.

mod base;
pub mod defaults;
mod matcher;

pub use base::{KnowledgeBase, KnowledgeEntry};
pub use matcher::{LocalAnswer, LocalMatcher};
