//! Text analysis primitives
//!
//! Each analyzer maps raw text to one signal using the shared lexicon:
//! - Sentiment: polarity label + compound score
//! - Keywords: ranked salient terms
//! - Emotions: multi-label match counts
//! - Crisis: self-harm risk phrases

pub mod crisis;
pub mod emotion;
pub mod keywords;
pub mod sentiment;

pub use crisis::CrisisDetector;
pub use emotion::EmotionDetector;
pub use keywords::{KeywordExtractor, DEFAULT_MAX_KEYWORDS};
pub use sentiment::SentimentScorer;
