use super::SnapshotStorage;
use crate::core::Ticket;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default slot name; shared with the browser dashboard's storage key
pub const DEFAULT_SLOT: &str = "helpdesk_tickets";

/// File-backed storage slot
///
/// Keeps the whole ticket list as one JSON document at
/// `<dir>/<slot>.json`. Writes replace the document; there is no journal
/// or partial update.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Creates a storage slot named [`DEFAULT_SLOT`] inside `dir`
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self::with_slot(dir, DEFAULT_SLOT)
    }

    /// Creates a storage slot with a custom name inside `dir`
    pub fn with_slot(dir: impl AsRef<Path>, slot: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{slot}.json")),
        }
    }

    /// Path of the backing JSON document
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStorage for FileStorage {
    fn load(&self) -> Result<Option<Vec<Ticket>>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "storage slot absent");
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        let tickets: Vec<Ticket> = serde_json::from_str(&content)?;
        debug!(count = tickets.len(), "loaded tickets from slot");
        Ok(Some(tickets))
    }

    fn save(&self, tickets: &[Ticket]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(tickets)?;
        fs::write(&self.path, content)?;
        debug!(count = tickets.len(), path = %self.path.display(), "persisted tickets");
        Ok(())
    }
}
