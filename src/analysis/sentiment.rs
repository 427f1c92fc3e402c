//! Lexicon-based sentiment scoring

use crate::lexicon::LexiconTables;
use crate::models::{Sentiment, SentimentScore};
use std::sync::Arc;

pub struct SentimentScorer {
    lexicon: Arc<LexiconTables>,
}

impl SentimentScorer {
    pub fn new(lexicon: Arc<LexiconTables>) -> Self {
        Self { lexicon }
    }

    /// Score text by counting whole-word positive and negative hits
    pub fn score(&self, text: &str) -> SentimentScore {
        let lowered = text.to_lowercase();

        let p = self.lexicon.positive_matcher().count(&lowered) as f64;
        let n = self.lexicon.negative_matcher().count(&lowered) as f64;
        let word_count = text.split_whitespace().count() as f64;

        let denominator = p + n + 1.0;

        let (label, compound_score) = if p > n {
            (Sentiment::Positive, 0.5 + 0.5 * (p - n) / denominator)
        } else if n > p {
            (Sentiment::Negative, -0.5 - 0.5 * (n - p) / denominator)
        } else {
            (Sentiment::Neutral, 0.0)
        };

        // Hyphenated tokens can carry several hits, so keep this non-negative
        let neutral_score = (1.0 - (p + n) / (word_count + 1.0)).clamp(0.0, 1.0);

        SentimentScore {
            label,
            compound_score,
            positive_score: p / denominator,
            negative_score: n / denominator,
            neutral_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> SentimentScorer {
        SentimentScorer::new(Arc::new(LexiconTables::default()))
    }

    #[test]
    fn test_positive_message() {
        let score = scorer().score("I feel happy and grateful today");
        assert_eq!(score.label, Sentiment::Positive);
        // p = 2, n = 0
        assert!((score.compound_score - (0.5 + 0.5 * 2.0 / 3.0)).abs() < 1e-9);
        assert!((score.positive_score - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(score.negative_score, 0.0);
    }

    #[test]
    fn test_negative_message() {
        let score = scorer().score("I am feeling really anxious and scared about my exam");
        assert_eq!(score.label, Sentiment::Negative);
        assert!((score.compound_score - (-0.5 - 0.5 * 2.0 / 3.0)).abs() < 1e-9);
        // 10 tokens, 2 hits
        assert!((score.neutral_score - (1.0 - 2.0 / 11.0)).abs() < 1e-9);
    }

    #[test]
    fn test_balanced_counts_are_neutral() {
        let score = scorer().score("good day but a bad night");
        assert_eq!(score.label, Sentiment::Neutral);
        assert_eq!(score.compound_score, 0.0);
    }

    #[test]
    fn test_empty_text() {
        let score = scorer().score("");
        assert_eq!(score.label, Sentiment::Neutral);
        assert_eq!(score.compound_score, 0.0);
        assert_eq!(score.positive_score, 0.0);
        assert_eq!(score.negative_score, 0.0);
        assert_eq!(score.neutral_score, 1.0);
    }

    #[test]
    fn test_case_and_boundaries() {
        let s = scorer();
        assert_eq!(s.score("HAPPY").label, Sentiment::Positive);
        // "sadness" is not the word "sad"
        assert_eq!(s.score("sadness").label, Sentiment::Neutral);
    }

    #[test]
    fn test_repeated_words_count_each_time() {
        let score = scorer().score("sad sad sad but happy");
        assert_eq!(score.label, Sentiment::Negative);
        assert!((score.negative_score - 3.0 / 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_scores_stay_in_range() {
        let s = scorer();
        let cases = [
            "",
            "happy happy happy happy happy happy",
            "sad-bad-awful-terrible",
            "nothing to see here",
            "love hate love hate love",
        ];

        for text in cases {
            let score = s.score(text);
            assert!((-1.0..=1.0).contains(&score.compound_score), "{}", text);
            assert!((0.0..=1.0).contains(&score.positive_score), "{}", text);
            assert!((0.0..=1.0).contains(&score.negative_score), "{}", text);
            assert!((0.0..=1.0).contains(&score.neutral_score), "{}", text);
        }
    }
}
