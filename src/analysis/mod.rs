//! Pure text analysis: entity extraction, classification, and the
//! reasoning cascade.
//!
//! # INVARIANT
//! Nothing in this module may fail or panic on any string input, including
//! the empty string and binary garbage. Every function degrades to its
//! "unknown / neutral / general_statement" defaults instead of erroring.
//! Everything here is deterministic and stateless so results can be
//! re-derived at any time.

pub mod classifier;
pub mod entities;
pub mod polarity;
pub mod reasoning;

pub use classifier::{ClassificationResult, Classifier, Intent, Sentiment};
pub use entities::{extract_entities, Entity, EntityKind};
pub use polarity::{LexiconScorer, PolarityScorer};
pub use reasoning::{reason, ReasoningResult};
