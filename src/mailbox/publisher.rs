use tracing::{debug, warn};

use super::record::Record;
use super::slot::Mailbox;
use crate::analysis::{reason, Classifier};
use crate::speech::Transcript;

/// Runs a finalized transcript through the full analysis pipeline and
/// publishes the resulting record to the mailbox.
///
/// Pure aside from the mailbox write. A failed write is retried once and
/// then dropped (the next utterance self-heals the slot), so a single
/// bad publish can never take the producer down.
pub struct RecordPublisher {
    classifier: Classifier,
    mailbox: Mailbox,
}

impl RecordPublisher {
    pub fn new(classifier: Classifier, mailbox: Mailbox) -> Self {
        Self {
            classifier,
            mailbox,
        }
    }

    pub fn publish(&self, transcript: &Transcript) -> Record {
        let classification = self.classifier.classify(transcript.text());
        let suggestions = reason(&classification);
        let record = Record::new(transcript.text(), classification, suggestions);

        match self.mailbox.store(&record) {
            Ok(()) => debug!("record published to {}", self.mailbox.path().display()),
            Err(first) => {
                warn!("mailbox write failed, retrying once: {}", first);
                if let Err(second) = self.mailbox.store(&record) {
                    warn!("mailbox write failed again, dropping record: {}", second);
                }
            }
        }

        record
    }
}
