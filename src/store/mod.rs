//! Authoritative in-memory ticket store
//!
//! [`TicketStore`] is the single source of truth for ticket state. It
//! loads the durable slot once at construction (falling back to the seed
//! data), mutates its private list synchronously, and writes the whole
//! list back after every successful mutation. All reads hand out owned
//! clones; callers can never reach store-internal state by reference.

use crate::core::{Comment, DashboardStats, NewTicket, Status, Ticket, TimelineEvent, User};
use crate::error::{HelpdeskError, Result};
use crate::seed;
use crate::storage::SnapshotStorage;
use chrono::Utc;
use tracing::{info, warn};

/// Owner of the ticket list and all lifecycle operations
pub struct TicketStore {
    tickets: Vec<Ticket>,
    next_seq: u32,
    actor: User,
    storage: Box<dyn SnapshotStorage>,
}

impl TicketStore {
    /// Opens a store over the given storage slot, acting as `actor`
    ///
    /// Restores the ticket list from the slot when present; otherwise
    /// installs the seed data and persists it once. The id counter starts
    /// past the highest `TKT-` sequence found, so ids stay unique even if
    /// the restored list is sparse or reordered.
    ///
    /// # Errors
    ///
    /// Returns an error when the slot exists but cannot be read or
    /// parsed. A missing slot is not an error.
    pub fn open(storage: Box<dyn SnapshotStorage>, actor: User) -> Result<Self> {
        let (tickets, seeded) = match storage.load()? {
            Some(tickets) => (tickets, false),
            None => (seed::demo_tickets(), true),
        };

        let next_seq = tickets
            .iter()
            .filter_map(|t| parse_sequence(&t.id))
            .max()
            .unwrap_or(0)
            + 1;

        let store = Self {
            tickets,
            next_seq,
            actor,
            storage,
        };
        if seeded {
            info!(count = store.tickets.len(), "seeded empty store");
            store.persist();
        }
        Ok(store)
    }

    /// Opens a store with the default synthetic current user
    pub fn open_default(storage: Box<dyn SnapshotStorage>) -> Result<Self> {
        Self::open(storage, seed::demo_user())
    }

    /// Returns a copy of all tickets in store order (most recent first)
    #[must_use]
    pub fn list_all(&self) -> Vec<Ticket> {
        self.tickets.clone()
    }

    /// Returns a copy of the ticket with the given id, if any
    ///
    /// Absence is an expected outcome, not an error.
    #[must_use]
    pub fn get_by_id(&self, id: &str) -> Option<Ticket> {
        self.tickets.iter().find(|t| t.id == id).cloned()
    }

    /// Creates a ticket and inserts it at the front of the list
    ///
    /// The new ticket starts Open with both timestamps "now", no
    /// comments, and a single `created` timeline event attributed to the
    /// acting user. Input fields are taken as given; validation belongs
    /// to the form collaborator (see [`crate::validate`]).
    pub fn create(&mut self, new_ticket: NewTicket) -> Ticket {
        let id = format!("TKT-{:03}", self.next_seq);
        self.next_seq += 1;
        let now = Utc::now();

        let ticket = Ticket {
            id: id.clone(),
            title: new_ticket.title,
            description: new_ticket.description,
            category: new_ticket.category,
            priority: new_ticket.priority,
            status: Status::Open,
            created_by: self.actor.clone(),
            assigned_to: None,
            created_at: now,
            updated_at: now,
            comments: Vec::new(),
            timeline: vec![TimelineEvent::created(&id, self.actor.clone())],
        };

        self.tickets.insert(0, ticket.clone());
        self.persist();
        info!(id = %ticket.id, "created ticket");
        ticket
    }

    /// Adds a comment to an existing ticket
    ///
    /// Appends the comment and a `comment_added` timeline event, bumps
    /// `updated_at`, persists, and returns a copy of the new comment.
    ///
    /// # Errors
    ///
    /// Returns [`HelpdeskError::TicketNotFound`] when no ticket has the
    /// given id; nothing is mutated in that case.
    pub fn add_comment(&mut self, ticket_id: &str, content: &str) -> Result<Comment> {
        let ticket = self
            .tickets
            .iter_mut()
            .find(|t| t.id == ticket_id)
            .ok_or_else(|| HelpdeskError::ticket_not_found(ticket_id))?;

        let comment = Comment::new(ticket_id, self.actor.clone(), content);
        ticket.comments.push(comment.clone());
        ticket
            .timeline
            .push(TimelineEvent::comment_added(ticket_id, self.actor.clone()));
        ticket.updated_at = Utc::now();

        self.persist();
        info!(ticket_id, comment_id = %comment.id, "added comment");
        Ok(comment)
    }

    /// Computes dashboard counts from the current list; no mutation
    #[must_use]
    pub fn compute_stats(&self) -> DashboardStats {
        DashboardStats::from_tickets(&self.tickets)
    }

    /// The identity all writes are attributed to
    #[must_use]
    pub fn actor(&self) -> &User {
        &self.actor
    }

    /// Number of tickets currently held
    #[must_use]
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    /// True when the store holds no tickets
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Best-effort write of the full list to the durable slot
    ///
    /// Persistence failures are logged and swallowed; the in-memory list
    /// remains authoritative for the rest of the session.
    fn persist(&self) {
        if let Err(e) = self.storage.save(&self.tickets) {
            warn!(error = %e, "failed to persist tickets; continuing in memory");
        }
    }
}

fn parse_sequence(id: &str) -> Option<u32> {
    id.strip_prefix("TKT-")?.parse().ok()
}
