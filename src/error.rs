//! Error types for helpdesk-core
//!
//! All fallible operations in this crate return [`Result`], an alias over
//! [`HelpdeskError`]. The taxonomy is deliberately small: a lookup miss,
//! a simulator-wrapped transient failure, and the storage/config plumbing
//! errors underneath them.

use thiserror::Error;

/// Result type alias using `HelpdeskError`
pub type Result<T> = std::result::Result<T, HelpdeskError>;

/// Errors that can occur in helpdesk-core operations
#[derive(Error, Debug)]
pub enum HelpdeskError {
    /// A ticket lookup or comment target does not exist in the store
    #[error("Ticket not found: {id}")]
    TicketNotFound { id: String },

    /// An operation failed inside the simulated backend; carries the
    /// operation-specific message shown to the caller
    #[error("{message}")]
    Transient { message: String },

    /// IO error from the durable storage slot
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error for the durable slot
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input rejected by the form-rule validators
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl HelpdeskError {
    /// Creates a transient failure with an operation-specific message
    pub fn transient(message: impl Into<String>) -> Self {
        Self::Transient {
            message: message.into(),
        }
    }

    /// Creates a not-found error for the given ticket id
    pub fn ticket_not_found(id: impl Into<String>) -> Self {
        Self::TicketNotFound { id: id.into() }
    }

    /// Returns true if this error is a ticket lookup miss
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::TicketNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = HelpdeskError::ticket_not_found("TKT-999");
        assert_eq!(err.to_string(), "Ticket not found: TKT-999");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_transient_carries_message() {
        let err = HelpdeskError::transient("No se pudieron cargar los tickets");
        assert_eq!(err.to_string(), "No se pudieron cargar los tickets");
        assert!(!err.is_not_found());
    }
}
