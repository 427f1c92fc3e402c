//! Chat memory helpers
//!
//! Role-tagged messages handed in by the caller, plus the rule-based chat
//! summary, title and summary-refresh cadence. Persistence stays with the
//! caller.

pub mod store;
pub mod summarizer;

pub use store::{ChatMessage, MessageRole};
pub use summarizer::{chat_title, should_refresh_summary, ChatSummarizer};
