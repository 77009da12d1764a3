//! Streaming speech front end: the recognizer collaborator boundary and
//! the state machine that turns a continuous chunk stream into discrete
//! finalized utterances.

pub mod assembler;
pub mod recognizer;

pub use assembler::{AssemblerPump, Transcript, UtteranceAssembler};
pub use recognizer::{FeedOutcome, Recognizer, RecognizerError};

#[cfg(feature = "vosk-backend")]
pub use recognizer::VoskRecognizer;
