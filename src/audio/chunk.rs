/// Fixed capture rate. The recognizer is constructed against this rate,
/// so capture must deliver it exactly; no resampling happens downstream.
pub const SAMPLE_RATE: u32 = 16_000;

/// Samples per chunk handed to the recognizer (8000 @ 16 kHz ≈ 0.5 s).
pub const BLOCK_SAMPLES: usize = 8_000;

/// An immutable block of mono 16-bit PCM samples at [`SAMPLE_RATE`].
/// Produced by the capture side, consumed exactly once by the
/// utterance assembler, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioChunk {
    samples: Vec<i16>,
}

impl AudioChunk {
    pub fn new(samples: Vec<i16>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
