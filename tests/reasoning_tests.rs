use callsense::analysis::{
    reason, ClassificationResult, Entity, EntityKind, Intent, Sentiment,
};

fn classification(
    sentiment: Sentiment,
    intent: Intent,
    category: &str,
    entities: Vec<Entity>,
) -> ClassificationResult {
    ClassificationResult {
        sentiment,
        intent,
        category: category.to_string(),
        emotion: "neutral".to_string(),
        entities,
    }
}

#[test]
fn sentiment_layer_sets_the_defaults() {
    let negative = reason(&classification(
        Sentiment::Negative,
        Intent::GeneralStatement,
        "unknown",
        vec![],
    ));
    assert_eq!(
        negative.objection_response,
        "I understand your concern, and I'll resolve it quickly."
    );
    assert_eq!(
        negative.next_question,
        "Could you tell me what went wrong exactly?"
    );
    assert_eq!(negative.recommendation, "");

    let positive = reason(&classification(
        Sentiment::Positive,
        Intent::GeneralStatement,
        "unknown",
        vec![],
    ));
    assert_eq!(
        positive.next_question,
        "Great! Would you like more options based on this?"
    );
    assert_eq!(positive.objection_response, "");

    let neutral = reason(&classification(
        Sentiment::Neutral,
        Intent::GeneralStatement,
        "unknown",
        vec![],
    ));
    assert_eq!(neutral.next_question, "Can you share a bit more details?");
}

#[test]
fn intent_layer_overwrites_sentiment_defaults() {
    let result = reason(&classification(
        Sentiment::Positive,
        Intent::Purchase,
        "unknown",
        vec![],
    ));
    assert_eq!(
        result.next_question,
        "Do you have any preferred brand or budget?"
    );
    assert_eq!(result.recommendation, "I can help compare the best options.");
}

#[test]
fn return_request_overwrites_the_objection_too() {
    let result = reason(&classification(
        Sentiment::Negative,
        Intent::ReturnRequest,
        "unknown",
        vec![],
    ));
    // Not the sentiment layer default.
    assert_eq!(
        result.objection_response,
        "No worries, I'll help with the return process."
    );
    assert_eq!(
        result.next_question,
        "Was the issue related to defect, wrong item, or something else?"
    );
    assert_eq!(result.recommendation, "Replacement is also available.");
}

#[test]
fn booking_sets_no_recommendation() {
    let result = reason(&classification(
        Sentiment::Neutral,
        Intent::Booking,
        "restaurant_reservation",
        vec![],
    ));
    assert_eq!(result.next_question, "Which date and time do you prefer?");
    assert_eq!(result.recommendation, "");
}

#[test]
fn category_layer_wins_the_recommendation_field() {
    let result = reason(&classification(
        Sentiment::Neutral,
        Intent::UpgradeRequest,
        "internet_plan_upgrade",
        vec![],
    ));
    // The UpgradeRequest recommendation is overwritten by the category.
    assert_eq!(
        result.recommendation,
        "Higher Mbps plans give smoother browsing."
    );
    // next_question is untouched by this category and keeps the intent value.
    assert_eq!(
        result.next_question,
        "What is your current plan/device so I can suggest a better upgrade?"
    );
}

#[test]
fn gadget_repair_also_claims_next_question() {
    let result = reason(&classification(
        Sentiment::Negative,
        Intent::GeneralStatement,
        "gadget_repair",
        vec![],
    ));
    assert_eq!(result.next_question, "Has this issue happened before?");
    assert_eq!(
        result.recommendation,
        "A quick diagnosis will confirm the problem."
    );
    // The sentiment layer objection survives: no later layer touched it.
    assert_eq!(
        result.objection_response,
        "I understand your concern, and I'll resolve it quickly."
    );
}

#[test]
fn entity_layer_unconditionally_wins_next_question() {
    let entities = vec![
        Entity::new("₹500", EntityKind::Money),
        Entity::new("#12", EntityKind::OrderId),
        Entity::new("Goa", EntityKind::Location),
    ];
    // Stack every earlier layer that writes next_question.
    let result = reason(&classification(
        Sentiment::Negative,
        Intent::ReturnRequest,
        "gadget_repair",
        entities,
    ));
    assert_eq!(
        result.next_question,
        "Thanks for the details about ₹500, #12, Goa. Could you share one more thing?"
    );
    // Other fields keep the latest non-entity layer values.
    assert_eq!(
        result.recommendation,
        "A quick diagnosis will confirm the problem."
    );
    assert_eq!(
        result.objection_response,
        "No worries, I'll help with the return process."
    );
}

#[test]
fn reasoning_is_deterministic() {
    let input = classification(
        Sentiment::Neutral,
        Intent::MobileRecharge,
        "mobile_recharge",
        vec![Entity::new("₹299", EntityKind::Money)],
    );
    assert_eq!(reason(&input), reason(&input));
}
