//! Triage engine - the message → analysis/response pipeline
//!
//! MESSAGE → {SENTIMENT, KEYWORDS, EMOTIONS, CRISIS} → RESPONSE + RESOURCES
//!
//! Pure: no persistence, no I/O after construction. Process never lets an
//! internal failure escape; it answers with a safe fallback instead.

use crate::analysis::{CrisisDetector, EmotionDetector, KeywordExtractor, SentimentScorer};
use crate::config::TriageConfig;
use crate::error::TriageError;
use crate::lexicon::{catalog, LexiconTables};
use crate::matcher::ResourceMatcher;
use crate::memory::{ChatMessage, ChatSummarizer};
use crate::models::{AnalysisResult, FaultReport, ProcessOutcome, ProcessResult, Sentiment};
use crate::response::{create_default_response_generator, ResponseContext, ResponseGenerator};
use crate::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sha2::{Digest, Sha256};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{error, info};

pub struct TriageEngine {
    lexicon: Arc<LexiconTables>,
    sentiment: SentimentScorer,
    keywords: KeywordExtractor,
    emotions: EmotionDetector,
    crisis: CrisisDetector,
    responses: ResponseGenerator,
    resources: ResourceMatcher,
    summarizer: ChatSummarizer,
    seed: Option<u64>,
}

impl TriageEngine {
    pub fn new(lexicon: Arc<LexiconTables>) -> Self {
        Self {
            sentiment: SentimentScorer::new(lexicon.clone()),
            keywords: KeywordExtractor::new(lexicon.clone()),
            emotions: EmotionDetector::new(lexicon.clone()),
            crisis: CrisisDetector::new(lexicon.clone()),
            responses: create_default_response_generator(lexicon.clone()),
            resources: ResourceMatcher::new(lexicon.clone()),
            summarizer: ChatSummarizer::new(lexicon.clone()),
            lexicon,
            seed: None,
        }
    }

    /// Embedded lexicon with the configured catalog, keyword limit and seed
    pub fn from_config(config: &TriageConfig) -> Self {
        let resources = catalog::load_or_default(&config.resources_file, config.seed_resources_file);
        let lexicon = LexiconTables::default().with_resources(resources);

        Self::new(Arc::new(lexicon))
            .with_max_keywords(config.max_keywords)
            .with_seed(config.seed)
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_max_keywords(mut self, max_keywords: usize) -> Self {
        self.keywords = KeywordExtractor::new(self.lexicon.clone()).with_max_keywords(max_keywords);
        self
    }

    pub fn with_response_generator(mut self, generator: ResponseGenerator) -> Self {
        self.responses = generator;
        self
    }

    pub fn lexicon(&self) -> &LexiconTables {
        &self.lexicon
    }

    // =============================
    // Analyze
    // =============================

    pub fn analyze(&self, message: &str) -> Result<AnalysisResult> {
        validate(message)?;

        let sentiment = self.sentiment.score(message);
        let keywords = self.keywords.extract(message);
        let emotions = self.emotions.detect(message);
        let crisis_phrases = self.crisis.matched_phrases(message);
        let is_crisis = !crisis_phrases.is_empty();

        info!(
            sentiment = %sentiment.label,
            compound_score = sentiment.compound_score,
            is_crisis = is_crisis,
            "Analyzed message"
        );

        Ok(AnalysisResult {
            sentiment,
            keywords,
            emotions,
            is_crisis,
            crisis_phrases,
        })
    }

    // =============================
    // Process
    // =============================

    /// Reply and resources for a message, with a per-request random source
    pub fn process(
        &self,
        message: &str,
        user_id: &str,
        is_crisis: Option<bool>,
    ) -> Result<ProcessOutcome> {
        let mut rng = self.request_rng(user_id, message);
        self.process_with_rng(message, user_id, is_crisis, &mut rng)
    }

    /// Same as [`process`](Self::process) with a caller-supplied random source.
    ///
    /// Only `InvalidInput` is returned as an error; anything else becomes a
    /// fallback outcome carrying a fault report.
    pub fn process_with_rng<R: Rng + ?Sized>(
        &self,
        message: &str,
        user_id: &str,
        is_crisis: Option<bool>,
        rng: &mut R,
    ) -> Result<ProcessOutcome> {
        validate(message)?;

        let attempt = panic::catch_unwind(AssertUnwindSafe(|| {
            self.run_pipeline(message, is_crisis.unwrap_or(false), rng)
        }));

        let fault = match attempt {
            Ok(Ok(result)) => {
                info!(
                    user_id = user_id,
                    sentiment = %result.sentiment,
                    is_crisis = result.is_crisis,
                    resources = result.resources.len(),
                    "Processed message"
                );
                return Ok(ProcessOutcome::Completed(result));
            }
            Ok(Err(e)) => TriageError::InternalFault(e.to_string()),
            Err(payload) => TriageError::InternalFault(panic_message(payload.as_ref())),
        };

        let report = FaultReport::new(fault.to_string());
        error!(
            user_id = user_id,
            fault_id = %report.fault_id,
            "Error processing message: {}",
            report.message
        );

        Ok(ProcessOutcome::Fallback {
            result: self.fallback_result(),
            fault: report,
        })
    }

    fn run_pipeline<R: Rng + ?Sized>(
        &self,
        message: &str,
        caller_crisis: bool,
        rng: &mut R,
    ) -> Result<ProcessResult> {
        let score = self.sentiment.score(message);
        let keywords = self.keywords.extract(message);
        let emotions = self.emotions.detect(message);

        // The caller's flag can only add a crisis signal, never clear one
        let is_crisis = caller_crisis || self.crisis.detect_crisis(message);

        let dominant = emotions.dominant();

        let ctx = ResponseContext::new(message, score.label, dominant, is_crisis);
        let reply = self.responses.generate(&ctx, rng)?;

        let resources =
            self.resources
                .match_resources(message, score.label, dominant, is_crisis, &keywords);

        Ok(ProcessResult {
            response: reply.text,
            resources,
            sentiment: score.label,
            is_crisis,
            keywords,
            emotions,
        })
    }

    fn fallback_result(&self) -> ProcessResult {
        ProcessResult {
            response: self.lexicon.fallback_reply().to_string(),
            resources: self.resources.default_resources(),
            sentiment: Sentiment::Neutral,
            is_crisis: false,
            keywords: Vec::new(),
            emotions: Default::default(),
        }
    }

    // =============================
    // Summaries
    // =============================

    pub fn summarize(&self, messages: &[ChatMessage]) -> String {
        self.summarizer.summarize(messages)
    }

    /// Seeded per input when a base seed is configured, otherwise from entropy
    fn request_rng(&self, user_id: &str, message: &str) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(derive_seed(seed, user_id, message)),
            None => StdRng::from_entropy(),
        }
    }
}

fn validate(message: &str) -> Result<()> {
    if message.trim().is_empty() {
        return Err(TriageError::InvalidInput("No message provided".to_string()));
    }
    Ok(())
}

fn derive_seed(seed: u64, user_id: &str, message: &str) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(seed.to_le_bytes());
    hasher.update(user_id.as_bytes());
    hasher.update([0u8]);
    hasher.update(message.as_bytes());
    let hash = hasher.finalize();

    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash[..8]);
    u64::from_le_bytes(bytes)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("panic: {}", s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("panic: {}", s)
    } else {
        "panic with unknown payload".to_string()
    }
}

//
// ================= Tests =================
//
