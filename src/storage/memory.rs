use super::SnapshotStorage;
use crate::core::Ticket;
use crate::error::Result;
use std::sync::Mutex;

/// In-process storage slot
///
/// Stands in for the durable slot when no storage medium exists and
/// backs most tests. Data lives only as long as the process.
#[derive(Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<Vec<Ticket>>>,
}

impl MemoryStorage {
    /// Creates an empty slot
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStorage for MemoryStorage {
    fn load(&self) -> Result<Option<Vec<Ticket>>> {
        let slot = self.slot.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(slot.clone())
    }

    fn save(&self, tickets: &[Ticket]) -> Result<()> {
        let mut slot = self.slot.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        *slot = Some(tickets.to_vec());
        Ok(())
    }
}
