//! Lexicon store
//!
//! Immutable word tables, templates and the resource catalog. Built once,
//! then shared read-only by every analysis component.

pub mod catalog;
pub mod defaults;

use crate::models::Resource;
use crate::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Bucket used when an emotion has no coping mapping
pub const DEFAULT_COPING_BUCKET: &str = "stress";

/// Serializable form of a lexicon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconDocument {
    pub positive_words: Vec<String>,
    pub negative_words: Vec<String>,
    pub stop_words: Vec<String>,
    pub emotion_keywords: Vec<EmotionEntry>,
    pub crisis_phrases: Vec<String>,
    pub greeting_phrases: Vec<String>,
    pub pain_keywords: Vec<String>,
    pub response_templates: HashMap<String, Vec<String>>,
    pub coping_strategies: HashMap<String, Vec<String>>,
    pub coping_buckets: HashMap<String, String>,
    pub sing_reply: String,
    pub fallback_reply: String,
    #[serde(default = "defaults::resources")]
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionEntry {
    pub emotion: String,
    pub keywords: Vec<String>,
}

/// Whole-word matcher over a fixed word set
#[derive(Debug, Clone)]
pub struct WordMatcher {
    regex: Option<Regex>,
}

impl WordMatcher {
    pub fn new(words: &[String]) -> Result<Self> {
        if words.is_empty() {
            return Ok(Self { regex: None });
        }

        // Longest first so multi-word entries win over their prefixes
        let mut sorted: Vec<&String> = words.iter().collect();
        sorted.sort_by(|a, b| b.len().cmp(&a.len()));

        let alternation = sorted
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join("|");

        let regex = Regex::new(&format!(r"\b(?:{})\b", alternation))?;
        Ok(Self { regex: Some(regex) })
    }

    /// Number of non-overlapping whole-word hits in already lower-cased text
    pub fn count(&self, text: &str) -> usize {
        self.regex
            .as_ref()
            .map(|re| re.find_iter(text).count())
            .unwrap_or(0)
    }
}

/// Immutable lexicon tables with compiled matchers
#[derive(Debug, Clone)]
pub struct LexiconTables {
    stop_words: HashSet<String>,
    crisis_phrases: Vec<String>,
    greeting_phrases: Vec<String>,
    pain_keywords: Vec<String>,
    response_templates: HashMap<String, Vec<String>>,
    coping_strategies: HashMap<String, Vec<String>>,
    coping_buckets: HashMap<String, String>,
    sing_reply: String,
    fallback_reply: String,
    resources: Vec<Resource>,

    positive: WordMatcher,
    negative: WordMatcher,
    emotions: Vec<(String, WordMatcher)>,
}

fn normalize(words: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(words.len());
    for word in words {
        let word = word.trim().to_lowercase();
        if !word.is_empty() && !out.contains(&word) {
            out.push(word);
        }
    }
    out
}

fn non_empty(table: HashMap<String, Vec<String>>) -> HashMap<String, Vec<String>> {
    table
        .into_iter()
        .filter(|(_, values)| !values.is_empty())
        .map(|(key, values)| (key.trim().to_lowercase(), values))
        .collect()
}

impl LexiconTables {
    /// Build tables from a document, lower-casing every word and tag
    pub fn from_document(doc: LexiconDocument) -> Result<Self> {
        let positive_words = normalize(doc.positive_words);
        let negative_words = normalize(doc.negative_words);

        let mut emotions: Vec<(String, WordMatcher)> = Vec::with_capacity(doc.emotion_keywords.len());
        for entry in doc.emotion_keywords {
            let label = entry.emotion.trim().to_lowercase();
            if label.is_empty() || emotions.iter().any(|(l, _)| l == &label) {
                continue;
            }
            let keywords = normalize(entry.keywords);
            emotions.push((label, WordMatcher::new(&keywords)?));
        }

        let coping_buckets = doc
            .coping_buckets
            .into_iter()
            .map(|(emotion, bucket)| (emotion.trim().to_lowercase(), bucket.trim().to_lowercase()))
            .collect();

        let resources: Vec<Resource> = doc.resources.into_iter().map(Resource::normalized).collect();

        debug!(
            positive = positive_words.len(),
            negative = negative_words.len(),
            emotions = emotions.len(),
            resources = resources.len(),
            "Lexicon tables built"
        );

        Ok(Self {
            stop_words: normalize(doc.stop_words).into_iter().collect(),
            crisis_phrases: normalize(doc.crisis_phrases),
            greeting_phrases: normalize(doc.greeting_phrases),
            pain_keywords: normalize(doc.pain_keywords),
            response_templates: non_empty(doc.response_templates),
            coping_strategies: non_empty(doc.coping_strategies),
            coping_buckets,
            sing_reply: doc.sing_reply,
            fallback_reply: doc.fallback_reply,
            resources,
            positive: WordMatcher::new(&positive_words)?,
            negative: WordMatcher::new(&negative_words)?,
            emotions,
        })
    }

    /// Parse a complete substitute lexicon
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: LexiconDocument = serde_json::from_str(json)?;
        Self::from_document(doc)
    }

    /// The embedded tables
    pub fn embedded() -> Result<Self> {
        Self::from_document(defaults::document())
    }

    /// Same tables with a different resource catalog
    pub fn with_resources(mut self, resources: Vec<Resource>) -> Self {
        self.resources = resources.into_iter().map(Resource::normalized).collect();
        self
    }

    pub fn positive_matcher(&self) -> &WordMatcher {
        &self.positive
    }

    pub fn negative_matcher(&self) -> &WordMatcher {
        &self.negative
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Emotion matchers in table order
    pub fn emotion_matchers(&self) -> &[(String, WordMatcher)] {
        &self.emotions
    }

    pub fn crisis_phrases(&self) -> &[String] {
        &self.crisis_phrases
    }

    /// Substring test against the greeting phrases
    pub fn mentions_greeting(&self, lowered: &str) -> bool {
        self.greeting_phrases.iter().any(|g| lowered.contains(g.as_str()))
    }

    /// Substring test against the physical-pain lexicon
    pub fn mentions_pain(&self, lowered: &str) -> bool {
        self.pain_keywords.iter().any(|p| lowered.contains(p.as_str()))
    }

    pub fn templates(&self, category: &str) -> Option<&[String]> {
        self.response_templates.get(category).map(Vec::as_slice)
    }

    pub fn coping_strategies(&self, bucket: &str) -> Option<&[String]> {
        self.coping_strategies.get(bucket).map(Vec::as_slice)
    }

    /// Coping bucket for an emotion, falling back to the stress bucket
    pub fn coping_bucket_for(&self, emotion: &str) -> &str {
        self.coping_buckets
            .get(emotion)
            .map(String::as_str)
            .filter(|bucket| self.coping_strategies.contains_key(*bucket))
            .unwrap_or(DEFAULT_COPING_BUCKET)
    }

    pub fn sing_reply(&self) -> &str {
        &self.sing_reply
    }

    pub fn fallback_reply(&self) -> &str {
        &self.fallback_reply
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }
}

impl Default for LexiconTables {
    fn default() -> Self {
        // Embedded words are regex-escaped literals; compiling them cannot fail.
        Self::embedded().expect("embedded lexicon must compile")
    }
}
