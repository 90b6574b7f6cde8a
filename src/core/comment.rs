//! Comment entity

use crate::core::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A comment on a ticket
///
/// Content length rules (minimum 10 characters) are enforced by the form
/// collaborator before a comment reaches the store; the store itself
/// persists whatever it is given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Unique comment identifier (`CMT-` prefixed)
    pub id: String,
    /// Id of the owning ticket
    pub ticket_id: String,
    /// Comment author
    pub user: User,
    /// Comment body
    pub content: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Creates a comment for the given ticket, stamped "now"
    pub fn new(ticket_id: impl Into<String>, user: User, content: impl Into<String>) -> Self {
        Self {
            id: format!("CMT-{}", Uuid::new_v4()),
            ticket_id: ticket_id.into(),
            user,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}
