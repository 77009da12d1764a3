use serde::{Deserialize, Serialize};

use crate::analysis::{ClassificationResult, Entity, Intent, ReasoningResult, Sentiment};

/// The unit published to the mailbox: one transcript plus everything
/// derived from it. This struct IS the wire contract: all top-level
/// fields are required, and a reader must reject documents missing any
/// of them rather than crash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub text: String,
    pub sentiment: Sentiment,
    pub intent: Intent,
    pub category: String,
    pub emotion: String,
    pub entities: Vec<Entity>,
    pub ai_suggestions: ReasoningResult,
}

impl Record {
    pub fn new(
        text: impl Into<String>,
        classification: ClassificationResult,
        suggestions: ReasoningResult,
    ) -> Self {
        Self {
            text: text.into(),
            sentiment: classification.sentiment,
            intent: classification.intent,
            category: classification.category,
            emotion: classification.emotion,
            entities: classification.entities,
            ai_suggestions: suggestions,
        }
    }
}
