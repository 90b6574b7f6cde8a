//! helpdesk-core - Ticket store and filtering core for a helpdesk demo
//!
//! This crate implements the data layer of a small helpdesk ticketing
//! system: an authoritative in-memory ticket store persisted to a single
//! JSON slot, pure filtering over snapshots, and a latency simulator that
//! gives every operation the asynchronous, fallible delivery of a real
//! backend call. All data is synthetic; there is no network protocol and
//! no multi-user concurrency.
//!
//! # Example
//!
//! ```rust,ignore
//! use helpdesk_core::core::{Category, NewTicket, Priority};
//! use helpdesk_core::seed;
//! use helpdesk_core::service::TicketService;
//! use helpdesk_core::storage::MemoryStorage;
//!
//! let service = TicketService::open(Box::new(MemoryStorage::new()), seed::demo_user())?;
//! let ticket = service
//!     .create(NewTicket::new(
//!         "Impresora atascada",
//!         "La impresora de la planta 2 está atascada y no imprime.",
//!         Category::ItHardware,
//!         Priority::High,
//!     ))
//!     .await?;
//! ```

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod latency;
pub mod query;
pub mod seed;
pub mod service;
pub mod storage;
pub mod store;
pub mod validate;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{HelpdeskError, Result};
