//! Built-in response rules, listed in priority order

use super::{ResponseCategory, ResponseContext, ResponseRule};
use crate::lexicon::LexiconTables;
use crate::models::Sentiment;

/// Greetings only count for short messages
pub const GREETING_MAX_TOKENS: usize = 5;

/// Rule: crisis signal routes to hotline templates
pub struct CrisisRule;

impl ResponseRule for CrisisRule {
    fn name(&self) -> &'static str {
        "crisis"
    }

    fn category(&self, ctx: &ResponseContext<'_>, _lexicon: &LexiconTables) -> Option<ResponseCategory> {
        ctx.is_crisis.then_some(ResponseCategory::Crisis)
    }
}

/// Rule: requests to sing get a fixed reply
pub struct SingRule;

impl ResponseRule for SingRule {
    fn name(&self) -> &'static str {
        "sing"
    }

    fn category(&self, ctx: &ResponseContext<'_>, _lexicon: &LexiconTables) -> Option<ResponseCategory> {
        (!ctx.is_crisis && ctx.lowered.contains("sing")).then_some(ResponseCategory::Sing)
    }
}

/// Rule: short messages containing a greeting phrase
pub struct GreetingRule;

impl ResponseRule for GreetingRule {
    fn name(&self) -> &'static str {
        "greeting"
    }

    fn category(&self, ctx: &ResponseContext<'_>, lexicon: &LexiconTables) -> Option<ResponseCategory> {
        (ctx.token_count < GREETING_MAX_TOKENS && lexicon.mentions_greeting(&ctx.lowered))
            .then_some(ResponseCategory::Greeting)
    }
}

/// Rule: physical pain mentions
pub struct PainRule;

impl ResponseRule for PainRule {
    fn name(&self) -> &'static str {
        "pain"
    }

    fn category(&self, ctx: &ResponseContext<'_>, lexicon: &LexiconTables) -> Option<ResponseCategory> {
        lexicon
            .mentions_pain(&ctx.lowered)
            .then_some(ResponseCategory::Pain)
    }
}

/// Rule: always matches, keyed by sentiment label
pub struct SentimentRule;

impl ResponseRule for SentimentRule {
    fn name(&self) -> &'static str {
        "sentiment"
    }

    fn category(&self, ctx: &ResponseContext<'_>, _lexicon: &LexiconTables) -> Option<ResponseCategory> {
        Some(match ctx.sentiment {
            Sentiment::Positive => ResponseCategory::Positive,
            Sentiment::Negative => ResponseCategory::Negative,
            Sentiment::Neutral => ResponseCategory::Neutral,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(message: &str, sentiment: Sentiment, is_crisis: bool) -> ResponseContext<'_> {
        ResponseContext::new(message, sentiment, None, is_crisis)
    }

    #[test]
    fn test_greeting_needs_short_message() {
        let lexicon = LexiconTables::default();
        assert_eq!(
            GreetingRule.category(&ctx("Hello there", Sentiment::Neutral, false), &lexicon),
            Some(ResponseCategory::Greeting)
        );
        assert_eq!(
            GreetingRule.category(
                &ctx("hello I have a question about sleep", Sentiment::Neutral, false),
                &lexicon
            ),
            None
        );
    }

    #[test]
    fn test_sing_never_shadows_crisis() {
        let lexicon = LexiconTables::default();
        assert_eq!(
            SingRule.category(&ctx("can you sing", Sentiment::Neutral, false), &lexicon),
            Some(ResponseCategory::Sing)
        );
        assert_eq!(
            SingRule.category(&ctx("sing before I end it all", Sentiment::Neutral, true), &lexicon),
            None
        );
    }

    #[test]
    fn test_pain_substring() {
        let lexicon = LexiconTables::default();
        assert_eq!(
            PainRule.category(&ctx("my back aches", Sentiment::Neutral, false), &lexicon),
            Some(ResponseCategory::Pain)
        );
        assert_eq!(
            PainRule.category(&ctx("a quiet afternoon", Sentiment::Neutral, false), &lexicon),
            None
        );
    }

    #[test]
    fn test_sentiment_rule_always_matches() {
        let lexicon = LexiconTables::default();
        for (sentiment, expected) in [
            (Sentiment::Positive, ResponseCategory::Positive),
            (Sentiment::Negative, ResponseCategory::Negative),
            (Sentiment::Neutral, ResponseCategory::Neutral),
        ] {
            assert_eq!(
                SentimentRule.category(&ctx("anything", sentiment, false), &lexicon),
                Some(expected)
            );
        }
    }
}
