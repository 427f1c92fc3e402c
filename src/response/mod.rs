//! Response generation
//!
//! An ordered list of guarded rules picks a template bucket; first match
//! wins. Default priority:
//!
//! CRISIS → SING → GREETING → PAIN → SENTIMENT (+ coping strategy)

pub mod rules;

use crate::error::TriageError;
use crate::lexicon::{LexiconTables, DEFAULT_COPING_BUCKET};
use crate::models::Sentiment;
use crate::Result;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

pub use rules::{CrisisRule, GreetingRule, PainRule, SentimentRule, SingRule};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseCategory {
    Crisis,
    Sing,
    Greeting,
    Pain,
    Positive,
    Negative,
    Neutral,
}

impl ResponseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCategory::Crisis => "crisis",
            ResponseCategory::Sing => "sing",
            ResponseCategory::Greeting => "greeting",
            ResponseCategory::Pain => "pain",
            ResponseCategory::Positive => "positive",
            ResponseCategory::Negative => "negative",
            ResponseCategory::Neutral => "neutral",
        }
    }

    fn is_sentiment(&self) -> bool {
        matches!(
            self,
            ResponseCategory::Positive | ResponseCategory::Negative | ResponseCategory::Neutral
        )
    }
}

/// Inputs the rules look at
#[derive(Debug, Clone)]
pub struct ResponseContext<'a> {
    pub message: &'a str,
    pub lowered: String,
    pub token_count: usize,
    pub sentiment: Sentiment,
    pub dominant_emotion: Option<&'a str>,
    pub is_crisis: bool,
}

impl<'a> ResponseContext<'a> {
    pub fn new(
        message: &'a str,
        sentiment: Sentiment,
        dominant_emotion: Option<&'a str>,
        is_crisis: bool,
    ) -> Self {
        Self {
            message,
            lowered: message.to_lowercase(),
            token_count: message.split_whitespace().count(),
            sentiment,
            dominant_emotion,
            is_crisis,
        }
    }
}

/// Trait for response rules
pub trait ResponseRule: Send + Sync {
    fn name(&self) -> &'static str;

    /// Template bucket this rule claims, if it applies
    fn category(&self, ctx: &ResponseContext<'_>, lexicon: &LexiconTables) -> Option<ResponseCategory>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedReply {
    pub text: String,
    pub category: ResponseCategory,
    pub rule: &'static str,
}

pub const COPING_PREFIX: &str = "\n\nHere's a strategy that might help: ";

/// Response generator that evaluates rules in order
pub struct ResponseGenerator {
    lexicon: Arc<LexiconTables>,
    rules: Vec<Box<dyn ResponseRule>>,
}

impl ResponseGenerator {
    pub fn new(lexicon: Arc<LexiconTables>) -> Self {
        Self {
            lexicon,
            rules: Vec::new(),
        }
    }

    pub fn add_rule(&mut self, rule: Box<dyn ResponseRule>) {
        self.rules.push(rule);
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Pick a reply for the message
    pub fn generate<R: Rng + ?Sized>(
        &self,
        ctx: &ResponseContext<'_>,
        rng: &mut R,
    ) -> Result<GeneratedReply> {
        let (rule, category) = self
            .rules
            .iter()
            .find_map(|rule| rule.category(ctx, &self.lexicon).map(|c| (rule.name(), c)))
            .unwrap_or(("none", ResponseCategory::Neutral));

        debug!(rule = rule, category = category.as_str(), "Response rule matched");

        if category == ResponseCategory::Sing {
            return Ok(GeneratedReply {
                text: self.lexicon.sing_reply().to_string(),
                category,
                rule,
            });
        }

        let mut text = self.pick_template(category, rng)?;

        if category.is_sentiment() && ctx.sentiment == Sentiment::Negative {
            if let Some(emotion) = ctx.dominant_emotion {
                if let Some(strategy) = self.pick_strategy(emotion, rng) {
                    text.push_str(COPING_PREFIX);
                    text.push_str(&strategy);
                }
            }
        }

        Ok(GeneratedReply {
            text,
            category,
            rule,
        })
    }

    fn pick_template<R: Rng + ?Sized>(
        &self,
        category: ResponseCategory,
        rng: &mut R,
    ) -> Result<String> {
        let templates = match self.lexicon.templates(category.as_str()) {
            Some(templates) => templates,
            // Never swap hotline copy for ordinary conversation
            None if category == ResponseCategory::Crisis => {
                return Err(TriageError::MissingTemplates(category.as_str().to_string()));
            }
            None => self
                .lexicon
                .templates(ResponseCategory::Neutral.as_str())
                .ok_or_else(|| {
                    TriageError::MissingTemplates(format!("{} (and neutral)", category.as_str()))
                })?,
        };

        templates
            .choose(rng)
            .cloned()
            .ok_or_else(|| TriageError::MissingTemplates(category.as_str().to_string()))
    }

    fn pick_strategy<R: Rng + ?Sized>(&self, emotion: &str, rng: &mut R) -> Option<String> {
        let bucket = self.lexicon.coping_bucket_for(&emotion.to_lowercase()).to_string();

        self.lexicon
            .coping_strategies(&bucket)
            .or_else(|| self.lexicon.coping_strategies(DEFAULT_COPING_BUCKET))
            .and_then(|strategies| strategies.choose(rng).cloned())
    }
}

/// Create a response generator with the standard rule order
pub fn create_default_response_generator(lexicon: Arc<LexiconTables>) -> ResponseGenerator {
    let mut generator = ResponseGenerator::new(lexicon);
    generator.add_rule(Box::new(CrisisRule));
    generator.add_rule(Box::new(SingRule));
    generator.add_rule(Box::new(GreetingRule));
    generator.add_rule(Box::new(PainRule));
    generator.add_rule(Box::new(SentimentRule));
    generator
}

//
// ================= Tests =================
//
