use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::Deserializer;
use serde::ser::{SerializeTuple, Serializer};
use serde::{Deserialize, Serialize};

/// The kind of structured information an [`Entity`] carries.
/// Wire names are SCREAMING_SNAKE_CASE ("ORDER_ID" etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityKind {
    Money,
    OrderId,
    Date,
    Time,
    Percent,
    Location,
    Brand,
}

/// A typed span of recognized structured information extracted from
/// free text. Serializes as a 2-element `[value, kind]` array, which is
/// the mailbox wire format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub value: String,
    pub kind: EntityKind,
}

impl Entity {
    pub fn new(value: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            value: value.into(),
            kind,
        }
    }
}

impl Serialize for Entity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut pair = serializer.serialize_tuple(2)?;
        pair.serialize_element(&self.value)?;
        pair.serialize_element(&self.kind)?;
        pair.end()
    }
}

impl<'de> Deserialize<'de> for Entity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (value, kind) = <(String, EntityKind)>::deserialize(deserializer)?;
        Ok(Self { value, kind })
    }
}

static MONEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(₹\s?\d+|\d+\s?rupees|\d+\s?rs)").unwrap());
static ORDER_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#\d+").unwrap());
static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\d{1,2}\s?(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)\b").unwrap()
});
static TIME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{1,2}\s?(am|pm)\b").unwrap());
static PERCENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d+%").unwrap());

const LOCATIONS: &[&str] = &["goa", "delhi", "mumbai", "bangalore", "india"];
const BRANDS: &[&str] = &["hp", "dell", "lenovo", "asus", "boat", "sony"];

/// Extracts all typed entities from `text`.
///
/// Rules run independently in declaration order (MONEY, ORDER_ID, DATE,
/// TIME, PERCENT, LOCATION, BRAND) and all contribute to one output
/// sequence. A token may match more than one rule; extraction does not
/// deduplicate. Emission order follows rule order, not position in text.
/// Never fails; unmatched text yields an empty Vec.
pub fn extract_entities(text: &str) -> Vec<Entity> {
    let lower = text.to_lowercase();
    let mut entities = Vec::new();

    for m in MONEY_RE.find_iter(&lower) {
        entities.push(Entity::new(m.as_str(), EntityKind::Money));
    }

    for m in ORDER_ID_RE.find_iter(text) {
        entities.push(Entity::new(m.as_str(), EntityKind::OrderId));
    }

    for m in DATE_RE.find_iter(&lower) {
        entities.push(Entity::new(m.as_str(), EntityKind::Date));
    }

    for m in TIME_RE.find_iter(&lower) {
        entities.push(Entity::new(m.as_str(), EntityKind::Time));
    }

    for m in PERCENT_RE.find_iter(text) {
        entities.push(Entity::new(m.as_str(), EntityKind::Percent));
    }

    // Vocabulary membership lower-cases the text but emits the
    // title-cased canonical form.
    for loc in LOCATIONS {
        if lower.contains(loc) {
            entities.push(Entity::new(title_case(loc), EntityKind::Location));
        }
    }

    for brand in BRANDS {
        if lower.contains(brand) {
            entities.push(Entity::new(title_case(brand), EntityKind::Brand));
        }
    }

    entities
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
