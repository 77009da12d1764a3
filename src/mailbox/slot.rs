use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::record::Record;

#[derive(Debug, Error)]
pub enum MailboxError {
    #[error("mailbox io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("mailbox document error: {0}")]
    Format(#[from] serde_json::Error),
}

/// The shared slot itself: a named JSON document on disk.
///
/// `store` never writes the visible slot in place. It serializes to a
/// sibling temp file and renames it over the slot; rename is atomic on
/// the same filesystem, so readers see either the old document or the
/// new one, never a half-written mix. That rename discipline is the only
/// cross-process synchronization; there are no locks.
pub struct Mailbox {
    path: PathBuf,
    tmp_path: PathBuf,
}

impl Mailbox {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut tmp = path.clone().into_os_string();
        tmp.push(".tmp");
        Self {
            path,
            tmp_path: PathBuf::from(tmp),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replaces the slot contents with `record`.
    pub fn store(&self, record: &Record) -> Result<(), MailboxError> {
        let json = serde_json::to_vec_pretty(record)?;
        fs::write(&self.tmp_path, json)?;
        fs::rename(&self.tmp_path, &self.path)?;
        Ok(())
    }

    /// Reads the current slot contents. Errors (including "slot does not
    /// exist yet") are for the caller to interpret; the observer treats
    /// them all as "no update available".
    pub fn load(&self) -> Result<Record, MailboxError> {
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
