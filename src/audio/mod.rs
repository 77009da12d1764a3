pub mod capture;
pub mod chunk;

pub use capture::AudioCapture;
pub use chunk::{AudioChunk, BLOCK_SAMPLES, SAMPLE_RATE};
