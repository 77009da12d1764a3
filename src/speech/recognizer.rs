use thiserror::Error;

use crate::audio::AudioChunk;

/// What the recognizer reports after consuming one chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedOutcome {
    /// Still inside an utterance; keep feeding.
    Accumulating,
    /// Utterance boundary detected; the accumulated text is ready.
    Final,
}

#[derive(Debug, Error)]
pub enum RecognizerError {
    /// The acoustic model could not be loaded. Fatal at startup: the
    /// assembler must not be constructed on top of this.
    #[error("acoustic model unavailable at '{0}'")]
    ModelUnavailable(String),
    /// The recognizer rejected one chunk. Recoverable: skip and keep
    /// accumulating.
    #[error("malformed audio chunk: {0}")]
    MalformedChunk(String),
}

/// The offline speech recognizer collaborator, consumed as an opaque
/// "accepts audio, signals utterance-final, yields transcript"
/// capability. Constructed once per assembler lifetime at the fixed
/// capture rate.
pub trait Recognizer: Send {
    /// Feeds one chunk and reports whether an utterance completed.
    fn feed(&mut self, chunk: &AudioChunk) -> Result<FeedOutcome, RecognizerError>;

    /// Returns the finalized text for the utterance that just completed,
    /// resetting it for the next one. Only meaningful right after
    /// [`FeedOutcome::Final`].
    fn take_text(&mut self) -> String;
}

#[cfg(feature = "vosk-backend")]
pub use vosk_backend::VoskRecognizer;

#[cfg(feature = "vosk-backend")]
mod vosk_backend {
    use super::{FeedOutcome, Recognizer, RecognizerError};
    use crate::audio::AudioChunk;

    /// Vosk-backed recognizer. Requires a Kaldi model directory on disk
    /// and libvosk at runtime.
    pub struct VoskRecognizer {
        // The recognizer references the model internally; keep both alive
        // together.
        _model: vosk::Model,
        inner: vosk::Recognizer,
    }

    impl VoskRecognizer {
        pub fn new(model_path: &str, sample_rate: u32) -> Result<Self, RecognizerError> {
            let model = vosk::Model::new(model_path)
                .ok_or_else(|| RecognizerError::ModelUnavailable(model_path.to_string()))?;
            let inner = vosk::Recognizer::new(&model, sample_rate as f32)
                .ok_or_else(|| RecognizerError::ModelUnavailable(model_path.to_string()))?;
            Ok(Self {
                _model: model,
                inner,
            })
        }
    }

    impl Recognizer for VoskRecognizer {
        fn feed(&mut self, chunk: &AudioChunk) -> Result<FeedOutcome, RecognizerError> {
            match self.inner.accept_waveform(chunk.samples()) {
                Ok(vosk::DecodingState::Finalized) => Ok(FeedOutcome::Final),
                Ok(_) => Ok(FeedOutcome::Accumulating),
                Err(e) => Err(RecognizerError::MalformedChunk(format!("{e:?}"))),
            }
        }

        fn take_text(&mut self) -> String {
            self.inner
                .result()
                .single()
                .map(|alt| alt.text.to_string())
                .unwrap_or_default()
        }
    }
}
