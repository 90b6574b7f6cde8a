//! Async facade over the ticket store
//!
//! [`TicketService`] is what UI collaborators talk to: every store
//! operation runs its synchronous mutation first, then hands the result
//! to the [`LatencySimulator`] for delayed delivery. Because the delay
//! happens after the mutation, sequential callers always observe a
//! linear store history even when results arrive out of issue order.

use crate::core::{Comment, DashboardStats, NewTicket, Ticket, User};
use crate::error::Result;
use crate::latency::LatencySimulator;
use crate::query::TicketFilter;
use crate::storage::SnapshotStorage;
use crate::store::TicketStore;
use tokio::sync::Mutex;

/// Operation-specific failure messages shown by the dashboard UI
mod messages {
    pub const LOAD_ALL: &str = "No se pudieron cargar los tickets";
    pub const LOAD_ONE: &str = "No se pudo cargar el ticket";
    pub const CREATE: &str = "No se pudo crear el ticket";
    pub const COMMENT: &str = "No se pudo añadir el comentario";
    pub const STATS: &str = "No se pudieron cargar las estadísticas";
    pub const FILTER: &str = "No se pudieron filtrar los tickets";
}

/// Store operations with simulated backend delivery
pub struct TicketService {
    store: Mutex<TicketStore>,
    latency: LatencySimulator,
}

impl TicketService {
    /// Wraps an already-open store
    #[must_use]
    pub fn new(store: TicketStore, latency: LatencySimulator) -> Self {
        Self {
            store: Mutex::new(store),
            latency,
        }
    }

    /// Opens a store over `storage` acting as `actor`, with the default
    /// delay bounds
    ///
    /// # Errors
    ///
    /// Fails when an existing durable slot cannot be read or parsed.
    pub fn open(storage: Box<dyn SnapshotStorage>, actor: User) -> Result<Self> {
        Ok(Self::new(
            TicketStore::open(storage, actor)?,
            LatencySimulator::default(),
        ))
    }

    /// Delivers a copy of all tickets in store order
    pub async fn list_all(&self) -> Result<Vec<Ticket>> {
        let tickets = self.store.lock().await.list_all();
        self.latency.deliver(Ok(tickets), messages::LOAD_ALL).await
    }

    /// Delivers a copy of the matching ticket, or `None` when absent
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Ticket>> {
        let ticket = self.store.lock().await.get_by_id(id);
        self.latency.deliver(Ok(ticket), messages::LOAD_ONE).await
    }

    /// Creates a ticket and delivers a copy of it
    pub async fn create(&self, new_ticket: NewTicket) -> Result<Ticket> {
        let ticket = self.store.lock().await.create(new_ticket);
        self.latency.deliver(Ok(ticket), messages::CREATE).await
    }

    /// Adds a comment and delivers a copy of it
    ///
    /// Delivers [`crate::HelpdeskError::TicketNotFound`] when the target
    /// id does not exist; no ticket is mutated in that case.
    pub async fn add_comment(&self, ticket_id: &str, content: &str) -> Result<Comment> {
        let outcome = self.store.lock().await.add_comment(ticket_id, content);
        self.latency.deliver(outcome, messages::COMMENT).await
    }

    /// Delivers dashboard counts computed from the current list
    pub async fn dashboard_stats(&self) -> Result<DashboardStats> {
        let stats = self.store.lock().await.compute_stats();
        self.latency.deliver(Ok(stats), messages::STATS).await
    }

    /// Delivers the tickets matching `filter`, in store order
    pub async fn filter(&self, filter: TicketFilter) -> Result<Vec<Ticket>> {
        let tickets = {
            let store = self.store.lock().await;
            filter.apply(&store.list_all())
        };
        self.latency.deliver(Ok(tickets), messages::FILTER).await
    }
}
