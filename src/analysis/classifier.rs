use std::fmt;

use serde::{Deserialize, Serialize};

use super::entities::{extract_entities, Entity};
use super::polarity::{LexiconScorer, PolarityScorer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Booking,
    Purchase,
    UpgradeRequest,
    ReturnRequest,
    MobileRecharge,
    GeneralStatement,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Booking => "booking",
            Intent::Purchase => "purchase",
            Intent::UpgradeRequest => "upgrade_request",
            Intent::ReturnRequest => "return_request",
            Intent::MobileRecharge => "mobile_recharge",
            Intent::GeneralStatement => "general_statement",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the classifier derives from one transcript. Deterministic
/// and re-derivable: identical text always yields an identical result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub sentiment: Sentiment,
    pub intent: Intent,
    pub category: String,
    pub emotion: String,
    pub entities: Vec<Entity>,
}

struct ConversationPattern {
    category: &'static str,
    emotion: &'static str,
    keywords: &'static [&'static str],
}

// Ordered rule table for joint category + emotion detection. Iteration
// order is the tie-break when keyword lists overlap, so this stays a
// slice scanned top to bottom, never a map.
const CONVERSATION_PATTERNS: &[ConversationPattern] = &[
    ConversationPattern {
        category: "electronics_purchase",
        emotion: "friendly_curious",
        keywords: &["budget", "headset", "bluetooth", "order", "battery"],
    },
    ConversationPattern {
        category: "internet_plan_upgrade",
        emotion: "polite_interested",
        keywords: &["upgrade", "internet", "plan", "router", "mbps"],
    },
    ConversationPattern {
        category: "product_return",
        emotion: "frustrated_relieved",
        keywords: &["wrong", "received", "return", "replacement", "pickup"],
    },
    ConversationPattern {
        category: "travel_booking",
        emotion: "excited_persuasive",
        keywords: &["trip", "package", "goa", "weekend", "emi"],
    },
    ConversationPattern {
        category: "bank_query",
        emotion: "calm_reassuring",
        keywords: &["account", "debit card", "dispatched", "shipped"],
    },
    ConversationPattern {
        category: "mobile_recharge",
        emotion: "neutral_satisfied",
        keywords: &["recharge", "299", "data", "gb", "plan"],
    },
    ConversationPattern {
        category: "software_subscription",
        emotion: "curious_convinced",
        keywords: &["renew", "discount", "antivirus", "offer"],
    },
    ConversationPattern {
        category: "restaurant_reservation",
        emotion: "polite_pleasant",
        keywords: &["book table", "reservation", "8 pm", "indoor", "outdoor"],
    },
    ConversationPattern {
        category: "gadget_repair",
        emotion: "concerned_relieved",
        keywords: &["repair", "laptop", "won't turn on", "diagnosis"],
    },
    ConversationPattern {
        category: "clothing_sale",
        emotion: "cheerful_excited",
        keywords: &["sale", "discount", "winter jackets", "offer"],
    },
];

// Intent triggers, first match wins. "book" outranks "order", so text
// containing both resolves to Booking.
const INTENT_TRIGGERS: &[(&[&str], Intent)] = &[
    (&["book"], Intent::Booking),
    (&["order"], Intent::Purchase),
    (&["upgrade"], Intent::UpgradeRequest),
    (&["return", "wrong"], Intent::ReturnRequest),
    (&["recharge"], Intent::MobileRecharge),
];

/// Turns one transcript into a [`ClassificationResult`]: sentiment from
/// the polarity scorer, intent from ordered substring triggers, category
/// and emotion jointly from the conversation pattern table, entities via
/// [`extract_entities`].
pub struct Classifier {
    scorer: Box<dyn PolarityScorer>,
}

impl Classifier {
    pub fn new() -> Self {
        Self::with_scorer(Box::new(LexiconScorer))
    }

    pub fn with_scorer(scorer: Box<dyn PolarityScorer>) -> Self {
        Self { scorer }
    }

    pub fn classify(&self, text: &str) -> ClassificationResult {
        let lower = text.to_lowercase();

        // Dead zone of (-0.1, 0.1) maps to neutral so weak signal does
        // not over-trigger.
        let polarity = self.scorer.polarity(text);
        let sentiment = if polarity > 0.1 {
            Sentiment::Positive
        } else if polarity < -0.1 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        };

        let intent = INTENT_TRIGGERS
            .iter()
            .find(|(words, _)| words.iter().any(|w| lower.contains(w)))
            .map(|&(_, intent)| intent)
            .unwrap_or(Intent::GeneralStatement);

        // First pattern with any keyword hit sets BOTH fields. Category
        // and emotion are never selected independently.
        let (category, emotion) = CONVERSATION_PATTERNS
            .iter()
            .find(|p| p.keywords.iter().any(|kw| lower.contains(kw)))
            .map(|p| (p.category, p.emotion))
            .unwrap_or(("unknown", "neutral"));

        ClassificationResult {
            sentiment,
            intent,
            category: category.to_string(),
            emotion: emotion.to_string(),
            entities: extract_entities(text),
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}
