//! Multi-label emotion detection

use crate::lexicon::LexiconTables;
use crate::models::EmotionTally;
use std::sync::Arc;

pub struct EmotionDetector {
    lexicon: Arc<LexiconTables>,
}

impl EmotionDetector {
    pub fn new(lexicon: Arc<LexiconTables>) -> Self {
        Self { lexicon }
    }

    /// Count whole-word keyword hits per emotion, in table order.
    ///
    /// Every hit counts, so a repeated keyword raises its emotion's count.
    pub fn detect(&self, text: &str) -> EmotionTally {
        let lowered = text.to_lowercase();
        let mut tally = EmotionTally::new();

        for (label, matcher) in self.lexicon.emotion_matchers() {
            let count = matcher.count(&lowered) as u32;
            tally.record(label, count);
        }

        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> EmotionDetector {
        EmotionDetector::new(Arc::new(LexiconTables::default()))
    }

    #[test]
    fn test_mixed_emotions() {
        let tally = detector().detect("I am feeling really anxious and scared about my exam");
        assert_eq!(tally.get("anxiety"), Some(1));
        assert_eq!(tally.get("fear"), Some(1));
        assert_eq!(tally.len(), 2);
        // Equal counts: anxiety comes first in the table
        assert_eq!(tally.dominant(), Some("anxiety"));
    }

    #[test]
    fn test_shared_keyword_counts_for_each_emotion() {
        let tally = detector().detect("I'm so frustrated");
        assert_eq!(tally.get("anger"), Some(1));
        assert_eq!(tally.get("frustration"), Some(1));
        assert_eq!(tally.dominant(), Some("anger"));
    }

    #[test]
    fn test_hits_are_summed() {
        let tally = detector().detect("Lonely, so lonely and alone");
        assert_eq!(tally.get("loneliness"), Some(3));
    }

    #[test]
    fn test_multi_word_keywords() {
        let tally = detector().detect("Honestly I'm FED UP and burned out");
        assert_eq!(tally.get("frustration"), Some(1));
        assert_eq!(tally.get("overwhelm"), Some(1));
    }

    #[test]
    fn test_no_emotion() {
        let tally = detector().detect("The meeting is at noon");
        assert!(tally.is_empty());
        assert_eq!(tally.dominant(), None);
    }

    #[test]
    fn test_never_reports_zero_counts() {
        let tally = detector().detect("happy sad angry scared confused lonely");
        assert!(tally.iter().all(|(_, count)| count > 0));
    }
}
