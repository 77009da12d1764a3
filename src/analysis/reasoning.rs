use serde::{Deserialize, Serialize};

use super::classifier::{ClassificationResult, Intent, Sentiment};
use super::entities::Entity;

/// Suggested dialogue actions derived from one classification. Fields may
/// be empty when no layer touched them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasoningResult {
    pub next_question: String,
    pub objection_response: String,
    pub recommendation: String,
}

/// Derives dialogue suggestions through a layered override cascade.
///
/// Four layers run in fixed order: sentiment, intent, category, entity.
/// A later layer that fires overwrites the fields it owns, discarding
/// whatever earlier layers produced there; fields it does not touch keep
/// the value from the latest layer that set them. The order is part of
/// the observable contract: an entity mention always wins `next_question`,
/// and a matching category always wins `recommendation`.
pub fn reason(classification: &ClassificationResult) -> ReasoningResult {
    let mut result = ReasoningResult::default();
    apply_sentiment_layer(&mut result, classification.sentiment);
    apply_intent_layer(&mut result, classification.intent);
    apply_category_layer(&mut result, &classification.category);
    apply_entity_layer(&mut result, &classification.entities);
    result
}

// Layer 1: exactly one sentiment branch fires, setting the defaults.
fn apply_sentiment_layer(result: &mut ReasoningResult, sentiment: Sentiment) {
    match sentiment {
        Sentiment::Negative => {
            result.objection_response =
                "I understand your concern, and I'll resolve it quickly.".to_string();
            result.next_question = "Could you tell me what went wrong exactly?".to_string();
        }
        Sentiment::Positive => {
            result.next_question =
                "Great! Would you like more options based on this?".to_string();
        }
        Sentiment::Neutral => {
            result.next_question = "Can you share a bit more details?".to_string();
        }
    }
}

// Layer 2: intent overwrites. GeneralStatement fires nothing.
fn apply_intent_layer(result: &mut ReasoningResult, intent: Intent) {
    match intent {
        Intent::Purchase => {
            result.next_question = "Do you have any preferred brand or budget?".to_string();
            result.recommendation = "I can help compare the best options.".to_string();
        }
        Intent::UpgradeRequest => {
            result.next_question =
                "What is your current plan/device so I can suggest a better upgrade?".to_string();
            result.recommendation =
                "Higher tiers usually give smoother performance.".to_string();
        }
        Intent::ReturnRequest => {
            result.next_question =
                "Was the issue related to defect, wrong item, or something else?".to_string();
            result.objection_response =
                "No worries, I'll help with the return process.".to_string();
            result.recommendation = "Replacement is also available.".to_string();
        }
        Intent::Booking => {
            result.next_question = "Which date and time do you prefer?".to_string();
        }
        Intent::MobileRecharge => {
            result.next_question = "How much data do you need daily?".to_string();
            result.recommendation =
                "The ₹299 plan is usually enough for moderate usage.".to_string();
        }
        Intent::GeneralStatement => {}
    }
}

// Layer 3: specific categories win the recommendation field outright.
fn apply_category_layer(result: &mut ReasoningResult, category: &str) {
    match category {
        "internet_plan_upgrade" => {
            result.recommendation = "Higher Mbps plans give smoother browsing.".to_string();
        }
        "travel_booking" => {
            result.recommendation = "Weekend Goa packages are trending right now.".to_string();
        }
        "gadget_repair" => {
            result.next_question = "Has this issue happened before?".to_string();
            result.recommendation = "A quick diagnosis will confirm the problem.".to_string();
        }
        _ => {}
    }
}

// Layer 4: any entity mention unconditionally claims next_question,
// listing every extracted value in extraction order.
fn apply_entity_layer(result: &mut ReasoningResult, entities: &[Entity]) {
    if entities.is_empty() {
        return;
    }
    let values = entities
        .iter()
        .map(|e| e.value.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    result.next_question =
        format!("Thanks for the details about {values}. Could you share one more thing?");
}
