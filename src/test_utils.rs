//! Test utilities for helpdesk-core
//!
//! Common fixtures shared by the unit tests across the crate.

#![cfg(test)]

use crate::core::{Category, NewTicket, Priority, Ticket};
use crate::seed;
use crate::storage::MemoryStorage;
use crate::store::TicketStore;

/// Opens a store over an empty in-memory slot
///
/// The slot is pre-written with an empty list so the store does not fall
/// back to the seed data.
pub fn open_empty_store() -> TicketStore {
    open_store_with(Vec::new())
}

/// Opens a store over an in-memory slot holding the given tickets
pub fn open_store_with(tickets: Vec<Ticket>) -> TicketStore {
    use crate::storage::SnapshotStorage;

    let storage = MemoryStorage::new();
    storage.save(&tickets).expect("Failed to pre-fill slot");
    TicketStore::open(Box::new(storage), seed::demo_user()).expect("Failed to open store")
}

/// A valid new-ticket payload with the given title
pub fn new_ticket_fixture(title: &str) -> NewTicket {
    NewTicket::new(
        title,
        format!("Descripción detallada del problema: {title}."),
        Category::ItHardware,
        Priority::Medium,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_fixture_has_no_tickets() {
        let store = open_empty_store();
        assert!(store.is_empty());
    }

    #[test]
    fn test_fixture_payload_passes_form_rules() {
        let payload = new_ticket_fixture("Impresora atascada");
        assert!(crate::validate::validate_new_ticket(&payload).is_ok());
    }
}
