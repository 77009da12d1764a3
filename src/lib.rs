pub mod analysis;
pub mod audio;
pub mod config;
pub mod mailbox;
pub mod speech;

// Re-export the main pipeline surface for convenient access
pub use mailbox::{Mailbox, Record, RecordObserver, RecordPublisher};
pub use speech::{Transcript, UtteranceAssembler};
