//! Core data models for the triage engine

use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

//
// ================= Sentiment =================
//

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// Compound scores within this distance of zero read as neutral in summaries
pub const SUMMARY_NEUTRAL_BAND: f64 = 0.05;

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }

    /// Label derived from a compound score alone.
    ///
    /// Used by chat summaries; it can disagree with the scorer's own label
    /// near zero.
    pub fn from_compound(compound: f64) -> Self {
        if compound >= SUMMARY_NEUTRAL_BAND {
            Sentiment::Positive
        } else if compound <= -SUMMARY_NEUTRAL_BAND {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SentimentScore {
    #[serde(rename = "sentiment")]
    pub label: Sentiment,
    pub compound_score: f64,
    pub positive_score: f64,
    pub negative_score: f64,
    pub neutral_score: f64,
}

impl SentimentScore {
    pub fn neutral() -> Self {
        Self {
            label: Sentiment::Neutral,
            compound_score: 0.0,
            positive_score: 0.0,
            negative_score: 0.0,
            neutral_score: 1.0,
        }
    }
}

//
// ================= Emotions =================
//

/// Emotion label → match count, in emotion-table order.
///
/// Only labels with at least one match are stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmotionTally {
    counts: Vec<(String, u32)>,
}

impl EmotionTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a count for a label; zero counts are dropped
    pub fn record(&mut self, label: &str, count: u32) {
        if count == 0 {
            return;
        }

        match self.counts.iter_mut().find(|(l, _)| l == label) {
            Some((_, existing)) => *existing += count,
            None => self.counts.push((label.to_string(), count)),
        }
    }

    pub fn get(&self, label: &str) -> Option<u32> {
        self.counts
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, c)| *c)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(l, c)| (l.as_str(), *c))
    }

    /// Label with the highest count; ties go to the earliest table entry
    pub fn dominant(&self) -> Option<&str> {
        let mut best: Option<(&str, u32)> = None;

        for (label, count) in self.iter() {
            match best {
                Some((_, top)) if count <= top => {}
                _ => best = Some((label, count)),
            }
        }

        best.map(|(label, _)| label)
    }
}

impl Serialize for EmotionTally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (label, count) in &self.counts {
            map.serialize_entry(label, count)?;
        }
        map.end()
    }
}

//
// ================= Resources =================
//

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resource {
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Resource {
    /// Lower-case and trim tags, dropping blanks and repeats
    pub fn normalized(mut self) -> Self {
        let mut tags: Vec<String> = Vec::with_capacity(self.tags.len());
        for tag in self.tags.drain(..) {
            let tag = tag.trim().to_lowercase();
            if !tag.is_empty() && !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        self.tags = tags;
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

//
// ================= Results =================
//

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    #[serde(flatten)]
    pub sentiment: SentimentScore,
    pub keywords: Vec<String>,
    pub emotions: EmotionTally,
    pub is_crisis: bool,
    pub crisis_phrases: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProcessResult {
    pub response: String,
    pub resources: Vec<Resource>,
    pub sentiment: Sentiment,
    pub is_crisis: bool,
    pub keywords: Vec<String>,
    pub emotions: EmotionTally,
}

/// Details of a contained failure, kept apart from the reply payload
#[derive(Debug, Clone, Serialize)]
pub struct FaultReport {
    pub fault_id: Uuid,
    pub message: String,
    pub occurred_at: DateTime<Utc>,
}

impl FaultReport {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            fault_id: Uuid::new_v4(),
            message: message.into(),
            occurred_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum ProcessOutcome {
    Completed(ProcessResult),
    Fallback {
        result: ProcessResult,
        fault: FaultReport,
    },
}

impl ProcessOutcome {
    pub fn result(&self) -> &ProcessResult {
        match self {
            ProcessOutcome::Completed(result) => result,
            ProcessOutcome::Fallback { result, .. } => result,
        }
    }

    pub fn fault(&self) -> Option<&FaultReport> {
        match self {
            ProcessOutcome::Completed(_) => None,
            ProcessOutcome::Fallback { fault, .. } => Some(fault),
        }
    }

    pub fn into_result(self) -> ProcessResult {
        match self {
            ProcessOutcome::Completed(result) => result,
            ProcessOutcome::Fallback { result, .. } => result,
        }
    }
}
