//! Frequency-based keyword extraction

use crate::lexicon::LexiconTables;
use std::collections::HashMap;
use std::sync::Arc;

pub const DEFAULT_MAX_KEYWORDS: usize = 10;

pub struct KeywordExtractor {
    lexicon: Arc<LexiconTables>,
    max_keywords: usize,
}

impl KeywordExtractor {
    pub fn new(lexicon: Arc<LexiconTables>) -> Self {
        Self {
            lexicon,
            max_keywords: DEFAULT_MAX_KEYWORDS,
        }
    }

    pub fn with_max_keywords(mut self, max_keywords: usize) -> Self {
        self.max_keywords = max_keywords;
        self
    }

    pub fn max_keywords(&self) -> usize {
        self.max_keywords
    }

    /// Extract up to the configured number of keywords
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.extract_top(text, self.max_keywords)
    }

    /// Most frequent non-stop-word tokens; ties keep first-occurrence order
    pub fn extract_top(&self, text: &str, max_keywords: usize) -> Vec<String> {
        let lowered = text.to_lowercase();

        let mut tally: Vec<(&str, usize)> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for word in lowered.split_whitespace() {
            if self.lexicon.is_stop_word(word) || !is_alphanumeric(word) {
                continue;
            }

            match index.get(word) {
                Some(&i) => tally[i].1 += 1,
                None => {
                    index.insert(word, tally.len());
                    tally.push((word, 1));
                }
            }
        }

        // Stable sort keeps scan order among equal counts
        tally.sort_by(|a, b| b.1.cmp(&a.1));

        tally
            .into_iter()
            .take(max_keywords)
            .map(|(word, _)| word.to_string())
            .collect()
    }
}

fn is_alphanumeric(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> KeywordExtractor {
        KeywordExtractor::new(Arc::new(LexiconTables::default()))
    }

    #[test]
    fn test_stop_words_removed() {
        let keywords = extractor().extract("I am feeling really anxious and scared about my exam");
        assert_eq!(keywords, vec!["feeling", "really", "anxious", "scared", "exam"]);
    }

    #[test]
    fn test_frequency_then_first_occurrence() {
        let keywords = extractor().extract("work stress sleep work sleep work");
        assert_eq!(keywords, vec!["work", "sleep", "stress"]);

        let tied = extractor().extract("sleep stress");
        assert_eq!(tied, vec!["sleep", "stress"]);
    }

    #[test]
    fn test_punctuated_tokens_dropped() {
        let keywords = extractor().extract("exam, exam tomorrow!");
        assert_eq!(keywords, vec!["exam"]);
    }

    #[test]
    fn test_limit_and_uniqueness() {
        let text = "alpha beta gamma delta epsilon zeta eta theta iota kappa lambda mu alpha";
        let keywords = extractor().with_max_keywords(4).extract(text);
        assert_eq!(keywords.len(), 4);
        assert_eq!(keywords[0], "alpha");

        let all = extractor().extract(text);
        assert_eq!(all.len(), DEFAULT_MAX_KEYWORDS);
        let mut deduped = all.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), all.len());
    }

    #[test]
    fn test_empty_and_stop_word_only() {
        assert!(extractor().extract("").is_empty());
        assert_eq!(extractor().extract("I am the one who is here"), vec!["one"]);
        assert!(extractor().extract("i am the and of").is_empty());
    }
}
