//! Form-rule validation helpers
//!
//! The store deliberately does not re-validate input; these are the rules
//! the ticket form enforces before calling it. The CLI runs them before
//! every write, and library callers embedding the store behind their own
//! UI can reuse them.

use crate::core::NewTicket;
use crate::error::{HelpdeskError, Result};

/// Title bounds, in characters
pub const TITLE_LEN: std::ops::RangeInclusive<usize> = 5..=100;
/// Description bounds, in characters
pub const DESCRIPTION_LEN: std::ops::RangeInclusive<usize> = 20..=1000;
/// Minimum comment length, in characters
pub const COMMENT_MIN_LEN: usize = 10;

/// Checks the ticket-form rules for a new ticket
///
/// # Errors
///
/// Returns `InvalidInput` naming the first violated rule.
pub fn validate_new_ticket(ticket: &NewTicket) -> Result<()> {
    let title_len = ticket.title.chars().count();
    if !TITLE_LEN.contains(&title_len) {
        return Err(HelpdeskError::InvalidInput(format!(
            "Title must be {}-{} characters, got {title_len}",
            TITLE_LEN.start(),
            TITLE_LEN.end()
        )));
    }

    let description_len = ticket.description.chars().count();
    if !DESCRIPTION_LEN.contains(&description_len) {
        return Err(HelpdeskError::InvalidInput(format!(
            "Description must be {}-{} characters, got {description_len}",
            DESCRIPTION_LEN.start(),
            DESCRIPTION_LEN.end()
        )));
    }

    Ok(())
}

/// Checks the comment-form rule for a comment body
///
/// # Errors
///
/// Returns `InvalidInput` when the content is shorter than
/// [`COMMENT_MIN_LEN`] characters (whitespace-trimmed).
pub fn validate_comment(content: &str) -> Result<()> {
    let len = content.trim().chars().count();
    if len < COMMENT_MIN_LEN {
        return Err(HelpdeskError::InvalidInput(format!(
            "Comment must be at least {COMMENT_MIN_LEN} characters, got {len}"
        )));
    }
    Ok(())
}
