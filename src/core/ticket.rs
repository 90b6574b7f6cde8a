//! Ticket entity and derived dashboard statistics

use crate::core::{Category, Comment, Priority, Status, TimelineEvent, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A helpdesk ticket
///
/// Field names on the wire are camelCase and timestamps are RFC 3339
/// strings, the durable slot format shared with the browser dashboard.
/// `comments` and `timeline` are append-only; insertion order is
/// chronological order and is never rewritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Unique ticket identifier, `TKT-NNN`
    pub id: String,
    /// Short summary
    pub title: String,
    /// Full problem description
    pub description: String,
    /// Functional area
    pub category: Category,
    /// Urgency
    pub priority: Priority,
    /// Lifecycle state
    pub status: Status,
    /// Reporter
    pub created_by: User,
    /// Assignee, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<User>,
    /// Creation timestamp; never changes
    pub created_at: DateTime<Utc>,
    /// Last-mutation timestamp; advances on every comment
    pub updated_at: DateTime<Utc>,
    /// Comments, oldest first
    pub comments: Vec<Comment>,
    /// Timeline events, oldest first
    pub timeline: Vec<TimelineEvent>,
}

/// Fields a caller supplies to create a ticket
///
/// Assumed pre-validated by the form collaborator (see
/// [`crate::validate`]); the store does not re-check them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTicket {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
}

impl NewTicket {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        priority: Priority,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category,
            priority,
        }
    }
}

/// Aggregate counts for the dashboard header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_tickets: usize,
    pub open_tickets: usize,
    pub in_progress_tickets: usize,
    pub resolved_tickets: usize,
    pub closed_tickets: usize,
}

impl DashboardStats {
    /// Computes stats by scanning a ticket snapshot; pure, no mutation
    #[must_use]
    pub fn from_tickets(tickets: &[Ticket]) -> Self {
        let count = |status: Status| tickets.iter().filter(|t| t.status == status).count();
        Self {
            total_tickets: tickets.len(),
            open_tickets: count(Status::Open),
            in_progress_tickets: count(Status::InProgress),
            resolved_tickets: count(Status::Resolved),
            closed_tickets: count(Status::Closed),
        }
    }
}
