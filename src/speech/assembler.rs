use std::fmt;

use ringbuf::traits::Consumer;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::recognizer::{FeedOutcome, Recognizer};
use crate::audio::{AudioChunk, BLOCK_SAMPLES};

/// One finalized utterance. Guaranteed non-empty after trimming, and only
/// ever created from a final recognizer result, never a partial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript(String);

impl Transcript {
    /// Trims `raw` and rejects results that are empty or whitespace-only.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// State machine over the recognizer collaborator: Accumulating →
/// Finalizing → Accumulating, cyclically, while the stream is open.
///
/// Construction requires an already-initialized recognizer, so a missing
/// acoustic model can never produce a half-working assembler.
pub struct UtteranceAssembler<R: Recognizer> {
    recognizer: R,
}

impl<R: Recognizer> UtteranceAssembler<R> {
    pub fn new(recognizer: R) -> Self {
        Self { recognizer }
    }

    /// Feeds one chunk. Returns a transcript only when the recognizer
    /// signals an utterance boundary AND the finalized text survives
    /// trimming; empty utterances are discarded silently. A chunk the
    /// recognizer rejects is skipped and accumulation continues.
    pub fn push_chunk(&mut self, chunk: &AudioChunk) -> Option<Transcript> {
        match self.recognizer.feed(chunk) {
            Ok(FeedOutcome::Accumulating) => None,
            Ok(FeedOutcome::Final) => {
                let raw = self.recognizer.take_text();
                match Transcript::new(&raw) {
                    Some(transcript) => {
                        info!("utterance finalized: '{}'", transcript);
                        Some(transcript)
                    }
                    None => {
                        debug!("empty utterance discarded");
                        None
                    }
                }
            }
            Err(e) => {
                warn!("recognizer rejected chunk, skipping: {}", e);
                None
            }
        }
    }
}

/// Blocking driver that pops fixed-size chunks off the capture ring
/// buffer, runs them through the assembler, and forwards finalized
/// transcripts to the producer loop. Runs on its own thread.
pub struct AssemblerPump<C, R>
where
    C: Consumer<Item = i16> + Send,
    R: Recognizer,
{
    consumer: C,
    assembler: UtteranceAssembler<R>,
    tx: mpsc::Sender<Transcript>,
    cancel: CancellationToken,
}

impl<C, R> AssemblerPump<C, R>
where
    C: Consumer<Item = i16> + Send,
    R: Recognizer,
{
    pub fn new(
        consumer: C,
        assembler: UtteranceAssembler<R>,
        tx: mpsc::Sender<Transcript>,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            consumer,
            assembler,
            tx,
            cancel,
        }
    }

    pub fn run(mut self) {
        info!("assembler pump started, block size {} samples", BLOCK_SAMPLES);

        let mut block = vec![0i16; BLOCK_SAMPLES];

        loop {
            if self.cancel.is_cancelled() {
                break;
            }

            // Wait for a full block; capture fills the buffer in real
            // time, so a short sleep is enough.
            if self.consumer.occupied_len() < BLOCK_SAMPLES {
                std::thread::sleep(std::time::Duration::from_millis(10));
                continue;
            }

            let _ = self.consumer.pop_slice(&mut block);
            let chunk = AudioChunk::new(block.clone());

            if let Some(transcript) = self.assembler.push_chunk(&chunk) {
                // Receiver gone means the producer loop ended.
                if self.tx.blocking_send(transcript).is_err() {
                    break;
                }
            }
        }

        info!("assembler pump stopped");
    }
}
