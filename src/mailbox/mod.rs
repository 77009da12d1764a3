//! Single-slot, last-write-wins cross-process publication.
//!
//! The mailbox holds exactly one serialized record. The writer replaces
//! it atomically (write to temp, then rename), so a reader never observes
//! a torn document; it may miss intermediate records entirely. Exactly
//! one producer writes; any number of observers read.

pub mod observer;
pub mod publisher;
pub mod record;
pub mod slot;

pub use observer::RecordObserver;
pub use publisher::RecordPublisher;
pub use record::Record;
pub use slot::{Mailbox, MailboxError};
