//! User entity
//!
//! Users are immutable reference data in this crate: the store attributes
//! every write to the acting user it was constructed with.

use serde::{Deserialize, Serialize};

/// A helpdesk user (reporter, assignee or commenter)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Optional avatar URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    /// Creates a user without an avatar
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            avatar: None,
        }
    }
}
