//! Ticket timeline events
//!
//! Every mutation on a ticket leaves an event on its append-only timeline.
//! The event kind is a closed set; current operations only produce
//! `Created` and `CommentAdded`, the remaining kinds are reserved for
//! status, assignment and priority changes.

use crate::core::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of timeline event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineEventKind {
    Created,
    StatusChanged,
    CommentAdded,
    Assigned,
    PriorityChanged,
}

/// A single entry on a ticket's timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    /// Unique event identifier (`TL-` prefixed)
    pub id: String,
    /// Id of the owning ticket
    pub ticket_id: String,
    /// What happened
    #[serde(rename = "type")]
    pub kind: TimelineEventKind,
    /// Human-readable description
    pub description: String,
    /// Who triggered the event
    pub user: User,
    /// When it happened
    pub timestamp: DateTime<Utc>,
    /// Optional event-specific payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl TimelineEvent {
    /// Creates an event for the given ticket, stamped "now"
    pub fn new(
        ticket_id: impl Into<String>,
        kind: TimelineEventKind,
        description: impl Into<String>,
        user: User,
    ) -> Self {
        Self {
            id: format!("TL-{}", Uuid::new_v4()),
            ticket_id: ticket_id.into(),
            kind,
            description: description.into(),
            user,
            timestamp: Utc::now(),
            metadata: None,
        }
    }

    /// The event recorded when a ticket is created
    pub fn created(ticket_id: impl Into<String>, user: User) -> Self {
        Self::new(ticket_id, TimelineEventKind::Created, "Ticket creado", user)
    }

    /// The event recorded when a comment is added
    pub fn comment_added(ticket_id: impl Into<String>, user: User) -> Self {
        Self::new(
            ticket_id,
            TimelineEventKind::CommentAdded,
            "Nuevo comentario añadido",
            user,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::User;

    #[test]
    fn test_event_kind_serializes_snake_case() {
        let json = serde_json::to_string(&TimelineEventKind::CommentAdded).unwrap();
        assert_eq!(json, "\"comment_added\"");
        let back: TimelineEventKind = serde_json::from_str("\"priority_changed\"").unwrap();
        assert_eq!(back, TimelineEventKind::PriorityChanged);
    }

    #[test]
    fn test_created_event_shape() {
        let user = User::new("USR-001", "Ana López", "ana.lopez@empresa.com");
        let event = TimelineEvent::created("TKT-001", user);
        assert_eq!(event.kind, TimelineEventKind::Created);
        assert_eq!(event.ticket_id, "TKT-001");
        assert_eq!(event.description, "Ticket creado");
        assert!(event.metadata.is_none());

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "created");
        assert_eq!(json["ticketId"], "TKT-001");
    }
}
