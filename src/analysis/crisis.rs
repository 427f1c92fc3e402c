//! Crisis phrase detector
//!
//! Plain substring matching over the lower-cased message. Deliberately
//! broader than the whole-word matching used elsewhere.

use crate::lexicon::LexiconTables;
use std::sync::Arc;
use tracing::warn;

#[derive(Clone)]
pub struct CrisisDetector {
    lexicon: Arc<LexiconTables>,
}

impl CrisisDetector {
    pub fn new(lexicon: Arc<LexiconTables>) -> Self {
        Self { lexicon }
    }

    /// Returns true if any crisis phrase is detected
    pub fn detect_crisis(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();

        match self
            .lexicon
            .crisis_phrases()
            .iter()
            .find(|phrase| lowered.contains(phrase.as_str()))
        {
            Some(phrase) => {
                warn!("Crisis detected: phrase '{}'", phrase);
                true
            }
            None => false,
        }
    }

    /// Every crisis phrase found in the text, in table order
    pub fn matched_phrases(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();

        self.lexicon
            .crisis_phrases()
            .iter()
            .filter(|phrase| lowered.contains(phrase.as_str()))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> CrisisDetector {
        CrisisDetector::new(Arc::new(LexiconTables::default()))
    }

    #[test]
    fn test_crisis_detection() {
        let detector = detector();

        assert!(detector.detect_crisis("I want to end my life"));
        assert!(detector.detect_crisis("Sometimes I think about suicide"));
        assert!(!detector.detect_crisis("I love my life"));
        assert!(!detector.detect_crisis("What is the meaning of life?"));
    }

    #[test]
    fn test_case_insensitive() {
        let detector = detector();

        assert!(detector.detect_crisis("I WANT TO DIE"));
        assert!(detector.detect_crisis("I Can't Go On"));
    }

    #[test]
    fn test_substring_not_word_bounded() {
        // Substring match, not word-bounded
        assert!(detector().detect_crisis("I won't give up on this puzzle"));
    }

    #[test]
    fn test_matched_phrases() {
        let phrases = detector().matched_phrases("I want to die, I want to end it all");
        assert_eq!(phrases, vec!["want to die", "end it all"]);
        assert!(detector().matched_phrases("a calm evening").is_empty());
    }
}
