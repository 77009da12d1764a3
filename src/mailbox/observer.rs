use tracing::debug;

use super::record::Record;
use super::slot::Mailbox;

/// Consumer-side view of the mailbox.
///
/// Polls the slot and keeps the last successfully parsed record. Any
/// read failure (slot missing, corrupt content, document missing
/// required fields) counts as "no update available": the previous
/// record stays current and the loop never errors out.
pub struct RecordObserver {
    mailbox: Mailbox,
    last_good: Option<Record>,
}

impl RecordObserver {
    pub fn new(mailbox: Mailbox) -> Self {
        Self {
            mailbox,
            last_good: None,
        }
    }

    /// Re-reads the slot and returns the most recent good record, which
    /// may be unchanged since the last poll. None until the first
    /// successful read.
    pub fn poll(&mut self) -> Option<&Record> {
        match self.mailbox.load() {
            Ok(record) => self.last_good = Some(record),
            Err(e) => debug!("mailbox not readable, keeping last record: {}", e),
        }
        self.last_good.as_ref()
    }
}
