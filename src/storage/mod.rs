//! Durable storage for the ticket list
//!
//! The external boundary of the core is a single named slot holding the
//! JSON-serialized ticket list. [`FileStorage`] keeps it on disk;
//! [`MemoryStorage`] is the no-durable-medium fallback.

mod file;
mod memory;
mod snapshot;

pub use file::{FileStorage, DEFAULT_SLOT};
pub use memory::MemoryStorage;
pub use snapshot::SnapshotStorage;
