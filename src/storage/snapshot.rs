use crate::core::Ticket;
use crate::error::Result;

/// Storage trait for the durable ticket slot
///
/// The whole ticket list is one document under one named slot; there is no
/// per-ticket addressing. Implementations must round-trip timestamps as
/// RFC 3339 strings.
pub trait SnapshotStorage: Send + Sync {
    /// Loads the stored ticket list, or `None` when the slot has never
    /// been written
    fn load(&self) -> Result<Option<Vec<Ticket>>>;

    /// Replaces the slot contents with the given list
    fn save(&self, tickets: &[Ticket]) -> Result<()>;
}
