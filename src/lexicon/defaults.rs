//! Embedded lexicon tables
//!
//! Static tables; nothing is allocated until a `LexiconDocument` is built.

use super::{EmotionEntry, LexiconDocument};
use crate::models::Resource;
use std::collections::HashMap;

const POSITIVE_WORDS: &[&str] = &[
    "happy", "good", "great", "excellent", "wonderful", "amazing", "love", "enjoy",
    "pleased", "delighted", "glad", "thankful", "grateful", "excited", "hopeful",
    "better", "positive", "calm", "relaxed", "peaceful", "confident",
];

const NEGATIVE_WORDS: &[&str] = &[
    "sad", "bad", "terrible", "awful", "horrible", "hate", "dislike", "angry",
    "upset", "disappointed", "frustrated", "annoyed", "worried", "anxious", "stressed",
    "depressed", "unhappy", "miserable", "lonely", "afraid", "scared", "hopeless",
    "worthless", "tired", "exhausted", "pain", "hurt", "sick", "worse", "negative",
];

const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your",
    "yours", "yourself", "yourselves", "he", "him", "his", "himself", "she",
    "her", "hers", "herself", "it", "its", "itself", "they", "them", "their",
    "theirs", "themselves", "what", "which", "who", "whom", "this", "that",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being",
    "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of",
    "at", "by", "for", "with", "about", "against", "between", "into", "through",
    "during", "before", "after", "above", "below", "to", "from", "up", "down",
    "in", "out", "on", "off", "over", "under", "again", "further", "then",
    "once", "here", "there", "when", "where", "why", "how", "all", "any",
    "both", "each", "few", "more", "most", "other", "some", "such", "no",
    "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s",
    "t", "can", "will", "just", "don", "should", "now",
];

/// Emotion table; order here is the tie-break order for the dominant emotion
const EMOTION_KEYWORDS: &[(&str, &[&str])] = &[
    ("anxiety", &["anxious", "worried", "nervous", "panic", "fear", "stress", "tense", "uneasy"]),
    ("sadness", &["sad", "depressed", "unhappy", "miserable", "down", "blue", "grief", "sorrow"]),
    ("anger", &["angry", "mad", "frustrated", "irritated", "annoyed", "furious", "rage", "hate"]),
    ("fear", &["afraid", "scared", "terrified", "frightened", "fearful", "phobia", "terror"]),
    ("joy", &["happy", "joyful", "excited", "delighted", "pleased", "glad", "content", "cheerful"]),
    ("surprise", &["surprised", "shocked", "amazed", "astonished", "stunned", "unexpected"]),
    ("disgust", &["disgusted", "repulsed", "revolted", "gross", "nauseous", "sickened"]),
    ("shame", &["ashamed", "embarrassed", "guilty", "remorseful", "regretful", "humiliated"]),
    ("confusion", &["confused", "puzzled", "perplexed", "unsure", "uncertain", "lost", "disoriented"]),
    ("loneliness", &["lonely", "alone", "isolated", "abandoned", "rejected", "unwanted", "solitary"]),
    ("frustration", &["frustrated", "fed up", "exasperated", "irritated", "annoyed"]),
    ("overwhelm", &["overwhelmed", "stressed", "burned out", "exhausted"]),
    ("pain", &["pain", "hurt", "ache", "sore", "suffering", "discomfort", "agony"]),
];

const CRISIS_PHRASES: &[&str] = &[
    "suicide", "kill myself", "end my life", "want to die",
    "harm myself", "self harm", "hurt myself", "no reason to live",
    "better off dead", "can't go on", "give up", "end it all",
];

const GREETING_PHRASES: &[&str] = &[
    "hello", "hi", "hey", "greetings", "good morning", "good afternoon", "good evening",
];

const PAIN_KEYWORDS: &[&str] = &["pain", "hurt", "ache", "sore", "suffering"];

const RESPONSE_TEMPLATES: &[(&str, &[&str])] = &[
    ("greeting", &[
        "Hello! I'm here to support you. How are you feeling today?",
        "Hi there! I'm your mental health assistant. How can I help you today?",
        "Welcome! I'm here to listen and provide support. What's on your mind?",
    ]),
    ("positive", &[
        "That's wonderful to hear! What's been contributing to your positive feelings?",
        "I'm glad you're feeling good! Would you like to talk about what's going well?",
        "It's great that you're in a positive state. How can I help maintain this momentum?",
    ]),
    ("negative", &[
        "I'm sorry to hear you're feeling this way. Would you like to talk more about what's troubling you?",
        "That sounds difficult. Remember that it's okay to feel this way, and I'm here to listen.",
        "I understand this is hard. Would it help to explore some coping strategies together?",
    ]),
    ("neutral", &[
        "How else can I support you today?",
        "Is there anything specific you'd like to discuss or learn about?",
        "I'm here to help. What would be most useful for you right now?",
    ]),
    ("crisis", &[
        "I'm concerned about what you've shared. If you're in immediate danger, please call 988 (National Suicide Prevention Lifeline) or text HOME to 741741 (Crisis Text Line). These services have trained counselors available 24/7.",
        "Your safety is important. Please reach out to emergency services or a crisis helpline like 988 right away. Would you like me to provide more crisis resources?",
        "This sounds serious, and I want to make sure you get the help you need. Please contact a crisis service like 988 or go to your nearest emergency room. Is there someone nearby who can support you right now?",
    ]),
    ("pain", &[
        "I'm sorry to hear you're experiencing pain. Physical discomfort can be challenging to deal with. Have you spoken with a healthcare provider about this?",
        "Physical pain can be difficult to manage. While I can't provide medical advice, I can suggest some relaxation techniques that might help alongside professional care.",
        "I understand that pain can be overwhelming. It's important to consult with a healthcare professional for proper diagnosis and treatment. Would you like some general information about pain management strategies?",
    ]),
];

const COPING_STRATEGIES: &[(&str, &[&str])] = &[
    ("anxiety", &[
        "Try deep breathing: Inhale for 4 counts, hold for 2, exhale for 6.",
        "Practice the 5-4-3-2-1 grounding technique: Acknowledge 5 things you see, 4 things you feel, 3 things you hear, 2 things you smell, and 1 thing you taste.",
        "Progressive muscle relaxation can help reduce physical tension.",
    ]),
    ("sadness", &[
        "Consider journaling about your feelings to process them.",
        "Reach out to a trusted friend or family member for support.",
        "Engage in a small activity that usually brings you joy, even if you don't feel like it at first.",
    ]),
    ("anger", &[
        "Take a short timeout to cool down before responding.",
        "Physical activity like a brisk walk can help release tension.",
        "Try to identify the underlying cause of your anger - sometimes it masks other emotions.",
    ]),
    ("stress", &[
        "Break large tasks into smaller, manageable steps.",
        "Practice mindfulness meditation for 5-10 minutes.",
        "Ensure you're meeting basic needs: adequate sleep, nutrition, and hydration.",
    ]),
    ("fear", &[
        "Write down your fears and evaluate how realistic they are.",
        "Focus on what you can control in the situation.",
        "Visualization techniques can help - imagine yourself successfully handling the feared situation.",
    ]),
    ("loneliness", &[
        "Consider joining a community group or online forum related to your interests.",
        "Schedule regular check-ins with friends or family, even if they're brief.",
        "Volunteer for a cause you care about - helping others can create meaningful connections.",
    ]),
    ("confusion", &[
        "Take a step back and write down what you know and what you're unsure about.",
        "Break complex problems into smaller, more manageable parts.",
        "Consider talking through your thoughts with someone you trust to gain perspective.",
    ]),
    ("pain", &[
        "Gentle stretching or movement may help with some types of pain, but always check with your doctor first.",
        "Mindfulness meditation can help change your relationship with pain, even if it doesn't eliminate it.",
        "Distraction techniques like engaging in an absorbing activity can temporarily shift focus away from pain.",
    ]),
];

/// Emotion label → coping bucket
const COPING_BUCKETS: &[(&str, &str)] = &[
    ("anxiety", "anxiety"),
    ("sadness", "sadness"),
    ("anger", "anger"),
    ("fear", "fear"),
    ("stress", "stress"),
    ("loneliness", "loneliness"),
    ("confusion", "confusion"),
    ("depression", "sadness"),
    ("overwhelm", "stress"),
    ("pain", "pain"),
];

const SING_REPLY: &str = "I can't sing, but I can share some uplifting music recommendations or guided meditations to help you relax!";

const FALLBACK_REPLY: &str = "I'm sorry, I encountered an error processing your message. How else can I help you?";

fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn table(entries: &[(&str, &[&str])]) -> HashMap<String, Vec<String>> {
    entries
        .iter()
        .map(|(key, values)| (key.to_string(), strings(values)))
        .collect()
}

fn emotions() -> Vec<EmotionEntry> {
    EMOTION_KEYWORDS
        .iter()
        .map(|(emotion, keywords)| EmotionEntry {
            emotion: emotion.to_string(),
            keywords: strings(keywords),
        })
        .collect()
}

fn resource(
    title: &str,
    description: &str,
    url: &str,
    kind: &str,
    category: &str,
    tags: &[&str],
) -> Resource {
    Resource {
        title: title.to_string(),
        description: description.to_string(),
        url: url.to_string(),
        kind: kind.to_string(),
        category: category.to_string(),
        tags: strings(tags),
    }
}

/// Catalog used when no resource document can be loaded
pub fn resources() -> Vec<Resource> {
    vec![
        resource(
            "Mindfulness Meditation Guide",
            "A beginner's guide to mindfulness meditation practices",
            "https://www.mindful.org/meditation/mindfulness-getting-started/",
            "Article",
            "Mindfulness",
            &["meditation", "mindfulness", "anxiety", "stress"],
        ),
        resource(
            "Depression Coping Strategies",
            "Evidence-based strategies for managing depression symptoms",
            "https://www.helpguide.org/articles/depression/coping-with-depression.htm",
            "Guide",
            "Depression",
            &["depression", "sadness", "coping", "self-care"],
        ),
        resource(
            "Anxiety Relief Techniques",
            "Quick techniques to manage anxiety in the moment",
            "https://www.anxietycanada.com/articles/new-thinking-patterns/",
            "Exercise",
            "Anxiety",
            &["anxiety", "stress", "panic", "breathing"],
        ),
        resource(
            "National Suicide Prevention Lifeline",
            "24/7 support for people in distress",
            "https://988lifeline.org/",
            "Crisis Support",
            "Crisis",
            &["crisis", "suicide", "emergency", "hotline"],
        ),
        resource(
            "Crisis Text Line",
            "Text HOME to 741741 for crisis support",
            "https://www.crisistextline.org/",
            "Crisis Support",
            "Crisis",
            &["crisis", "texting", "emergency", "support"],
        ),
        resource(
            "Pain Management Techniques",
            "Non-medication approaches to managing physical pain",
            "https://www.healthline.com/health/pain-management-techniques",
            "Guide",
            "Pain",
            &["pain", "physical", "management", "relief"],
        ),
    ]
}

/// The complete embedded lexicon
pub fn document() -> LexiconDocument {
    LexiconDocument {
        positive_words: strings(POSITIVE_WORDS),
        negative_words: strings(NEGATIVE_WORDS),
        stop_words: strings(STOP_WORDS),
        emotion_keywords: emotions(),
        crisis_phrases: strings(CRISIS_PHRASES),
        greeting_phrases: strings(GREETING_PHRASES),
        pain_keywords: strings(PAIN_KEYWORDS),
        response_templates: table(RESPONSE_TEMPLATES),
        coping_strategies: table(COPING_STRATEGIES),
        coping_buckets: COPING_BUCKETS
            .iter()
            .map(|(emotion, bucket)| (emotion.to_string(), bucket.to_string()))
            .collect(),
        sing_reply: SING_REPLY.to_string(),
        fallback_reply: FALLBACK_REPLY.to_string(),
        resources: resources(),
    }
}
