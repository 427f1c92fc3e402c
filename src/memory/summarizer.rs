//! Chat summarization
//!
//! Reuses the keyword extractor and sentiment scorer over the user side of
//! a conversation to produce a one-line summary.

use crate::analysis::{KeywordExtractor, SentimentScorer};
use crate::lexicon::LexiconTables;
use crate::memory::store::ChatMessage;
use crate::models::Sentiment;
use std::sync::Arc;
use tracing::debug;

pub const BRIEF_CONVERSATION: &str = "Brief conversation";

/// Keywords named in a summary
pub const SUMMARY_TOPIC_COUNT: usize = 3;

/// Summaries are refreshed every this many stored messages
pub const SUMMARY_REFRESH_INTERVAL: usize = 5;

pub const TITLE_MAX_CHARS: usize = 30;

pub struct ChatSummarizer {
    scorer: SentimentScorer,
    keywords: KeywordExtractor,
}

impl ChatSummarizer {
    pub fn new(lexicon: Arc<LexiconTables>) -> Self {
        Self {
            scorer: SentimentScorer::new(lexicon.clone()),
            keywords: KeywordExtractor::new(lexicon),
        }
    }

    /// Summarize a conversation in one line
    pub fn summarize(&self, messages: &[ChatMessage]) -> String {
        if messages.len() < 2 {
            return BRIEF_CONVERSATION.to_string();
        }

        let user_text = messages
            .iter()
            .filter(|m| m.is_user())
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        let keywords = self.keywords.extract(&user_text);
        let score = self.scorer.score(&user_text);

        // Re-derived from the compound score, independent of score.label
        let label = Sentiment::from_compound(score.compound_score);

        debug!(
            messages = messages.len(),
            keywords = keywords.len(),
            sentiment = %label,
            "Summarized chat"
        );

        if keywords.is_empty() {
            format!("Conversation with {} sentiment", label)
        } else {
            let topic = keywords
                .iter()
                .take(SUMMARY_TOPIC_COUNT)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            format!("Discussion about {} with {} sentiment", topic, label)
        }
    }
}

/// Title for a new chat from its first message
pub fn chat_title(first_message: &str) -> String {
    if first_message.chars().count() > TITLE_MAX_CHARS {
        let head: String = first_message.chars().take(TITLE_MAX_CHARS).collect();
        format!("{}...", head)
    } else {
        first_message.to_string()
    }
}

/// Whether a chat with this many messages is due for a new summary
pub fn should_refresh_summary(message_count: usize) -> bool {
    message_count > 0 && message_count % SUMMARY_REFRESH_INTERVAL == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summarizer() -> ChatSummarizer {
        ChatSummarizer::new(Arc::new(LexiconTables::default()))
    }

    #[test]
    fn test_brief_conversation() {
        assert_eq!(summarizer().summarize(&[]), BRIEF_CONVERSATION);
        assert_eq!(
            summarizer().summarize(&[ChatMessage::user("I feel sad")]),
            BRIEF_CONVERSATION
        );
    }

    #[test]
    fn test_two_message_chat() {
        let messages = vec![ChatMessage::user("I feel sad"), ChatMessage::assistant("...")];
        let summary = summarizer().summarize(&messages);

        // "feel" is not a stop word, so it leads the topic list
        assert_eq!(summary, "Discussion about feel, sad with negative sentiment");
        assert_eq!(summarizer().summarize(&messages), summary);
    }

    #[test]
    fn test_only_user_messages_are_read() {
        let messages = vec![
            ChatMessage::user("I am so"),
            ChatMessage::assistant("That's wonderful, great, amazing news!"),
        ];
        assert_eq!(
            summarizer().summarize(&messages),
            "Conversation with neutral sentiment"
        );
    }

    #[test]
    fn test_topics_capped_at_three() {
        let messages = vec![
            ChatMessage::user("exam exam exam work work sleep family friends"),
            ChatMessage::assistant("Tell me more."),
            ChatMessage::user("I am happy about family"),
        ];
        assert_eq!(
            summarizer().summarize(&messages),
            "Discussion about exam, work, family with positive sentiment"
        );
    }

    #[test]
    fn test_chat_title() {
        assert_eq!(chat_title("Short title"), "Short title");

        let long = "I have been feeling overwhelmed at work lately";
        assert_eq!(chat_title(long), "I have been feeling overwhelme...");
        assert_eq!(chat_title(&"é".repeat(31)), format!("{}...", "é".repeat(30)));
    }

    #[test]
    fn test_refresh_cadence() {
        assert!(!should_refresh_summary(0));
        assert!(!should_refresh_summary(4));
        assert!(should_refresh_summary(5));
        assert!(should_refresh_summary(10));
    }
}
