//! Core domain model for helpdesk-core
//!
//! Defines the ticket, comment, timeline-event and user entities plus the
//! closed status/priority/category enumerations. Everything here is plain
//! data; ownership and mutation rules live in [`crate::store`].

mod builders;
mod comment;
mod status;
mod ticket;
mod timeline;
mod user;

pub use builders::TicketBuilder;
pub use comment::Comment;
pub use status::{Category, Priority, Status};
pub use ticket::{DashboardStats, NewTicket, Ticket};
pub use timeline::{TimelineEvent, TimelineEventKind};
pub use user::User;
