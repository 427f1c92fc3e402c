//! Mindful Triage
//!
//! A rule-based triage engine for a mental-health support chat that:
//! - Scores message sentiment from positive/negative word lists
//! - Extracts keywords and tallies emotion-keyword hits
//! - Detects crisis phrases and always answers them with hotline guidance
//! - Picks a supportive reply through an ordered set of guarded rules
//! - Matches up to three resources from a JSON catalog
//! - Summarizes chat history in one sentence
//!
//! PIPELINE:
//! MESSAGE → ANALYZE → RESPOND → MATCH RESOURCES → RESULT (or safe fallback)

pub mod analysis;
pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod lexicon;
pub mod matcher;
pub mod memory;
pub mod models;
pub mod response;

pub use error::Result;

// Re-export common types
pub use config::TriageConfig;
pub use engine::TriageEngine;
pub use models::*;
