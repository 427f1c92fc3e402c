//! Resource matching
//!
//! Picks up to three catalog resources for a message. Catalog order is kept
//! within each step and steps append in priority order.

use crate::lexicon::LexiconTables;
use crate::models::{Resource, Sentiment};
use std::sync::Arc;

pub const MAX_RESOURCES: usize = 3;

/// Tags used when nothing matched and the message was negative
const NEGATIVE_AFFECT_TAGS: &[&str] = &["anxiety", "depression", "stress", "sadness"];

/// Tags used when nothing matched otherwise
const WELLBEING_TAGS: &[&str] = &["mindfulness", "self-care", "meditation"];

pub struct ResourceMatcher {
    lexicon: Arc<LexiconTables>,
}

/// Ordered, duplicate-free selection
struct Selection<'a> {
    picked: Vec<&'a Resource>,
}

impl<'a> Selection<'a> {
    fn push(&mut self, resource: &'a Resource) {
        if !self.picked.iter().any(|r| *r == resource) {
            self.picked.push(resource);
        }
    }
}

impl ResourceMatcher {
    pub fn new(lexicon: Arc<LexiconTables>) -> Self {
        Self { lexicon }
    }

    pub fn match_resources(
        &self,
        message: &str,
        sentiment: Sentiment,
        dominant_emotion: Option<&str>,
        is_crisis: bool,
        keywords: &[String],
    ) -> Vec<Resource> {
        let catalog = self.lexicon.resources();
        let lowered = message.to_lowercase();
        let emotion = dominant_emotion.map(str::to_lowercase);

        let mut selection = Selection { picked: Vec::new() };

        // Keyword or dominant-emotion tag hits
        for resource in catalog {
            let keyword_hit = keywords.iter().any(|k| resource.has_tag(k));
            let emotion_hit = emotion.as_deref().is_some_and(|e| resource.has_tag(e));
            if keyword_hit || emotion_hit {
                selection.push(resource);
            }
        }

        if is_crisis {
            for resource in catalog.iter().filter(|r| r.has_tag("crisis")) {
                selection.push(resource);
            }
        }

        if self.lexicon.mentions_pain(&lowered) {
            for resource in catalog.iter().filter(|r| r.has_tag("pain")) {
                selection.push(resource);
            }
        }

        if selection.picked.is_empty() {
            let fallback_tags = match sentiment {
                Sentiment::Negative => NEGATIVE_AFFECT_TAGS,
                _ => WELLBEING_TAGS,
            };

            for resource in catalog
                .iter()
                .filter(|r| fallback_tags.iter().any(|t| r.has_tag(t)))
            {
                selection.push(resource);
            }
        }

        selection
            .picked
            .into_iter()
            .take(MAX_RESOURCES)
            .cloned()
            .collect()
    }

    /// Resources for the safe fallback reply
    pub fn default_resources(&self) -> Vec<Resource> {
        self.match_resources("", Sentiment::Neutral, None, false, &[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> ResourceMatcher {
        ResourceMatcher::new(Arc::new(LexiconTables::default()))
    }

    fn titles(resources: &[Resource]) -> Vec<&str> {
        resources.iter().map(|r| r.title.as_str()).collect()
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_emotion_tag_match() {
        let resources = matcher().match_resources(
            "I am feeling really anxious and scared about my exam",
            Sentiment::Negative,
            Some("anxiety"),
            false,
            &words(&["feeling", "really", "anxious", "scared", "exam"]),
        );

        assert_eq!(
            titles(&resources),
            vec!["Mindfulness Meditation Guide", "Anxiety Relief Techniques"]
        );
        assert!(resources.iter().any(|r| r.has_tag("anxiety")));
    }

    #[test]
    fn test_crisis_resources_appended() {
        let resources = matcher().match_resources(
            "I want to end my life",
            Sentiment::Neutral,
            None,
            true,
            &words(&["want", "end", "life"]),
        );

        assert_eq!(
            titles(&resources),
            vec!["National Suicide Prevention Lifeline", "Crisis Text Line"]
        );
    }

    #[test]
    fn test_pain_resources_and_truncation() {
        let resources = matcher().match_resources(
            "my stress and panic make the pain worse",
            Sentiment::Negative,
            Some("pain"),
            true,
            &words(&["stress", "panic", "make", "pain", "worse"]),
        );

        assert_eq!(resources.len(), MAX_RESOURCES);
        assert_eq!(
            titles(&resources),
            vec![
                "Mindfulness Meditation Guide",
                "Anxiety Relief Techniques",
                "Pain Management Techniques",
            ]
        );
    }

    #[test]
    fn test_negative_fallback() {
        let resources = matcher().match_resources(
            "everything feels awful",
            Sentiment::Negative,
            None,
            false,
            &words(&["everything", "feels", "awful"]),
        );

        assert_eq!(
            titles(&resources),
            vec![
                "Mindfulness Meditation Guide",
                "Depression Coping Strategies",
                "Anxiety Relief Techniques",
            ]
        );
    }

    #[test]
    fn test_wellbeing_fallback() {
        let resources = matcher().default_resources();
        assert_eq!(
            titles(&resources),
            vec!["Mindfulness Meditation Guide", "Depression Coping Strategies"]
        );
    }

    #[test]
    fn test_no_duplicates_from_catalog() {
        let mut catalog = crate::lexicon::defaults::resources();
        catalog.push(catalog[2].clone());
        let lexicon = LexiconTables::default().with_resources(catalog);
        let matcher = ResourceMatcher::new(Arc::new(lexicon));

        let resources = matcher.match_resources(
            "panic",
            Sentiment::Negative,
            Some("anxiety"),
            false,
            &words(&["panic"]),
        );

        for (i, a) in resources.iter().enumerate() {
            for b in &resources[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(resources.len() <= MAX_RESOURCES);
    }

    #[test]
    fn test_empty_catalog_returns_nothing() {
        let lexicon = LexiconTables::default().with_resources(vec![]);
        let matcher = ResourceMatcher::new(Arc::new(lexicon));
        assert!(matcher.default_resources().is_empty());
    }
}
