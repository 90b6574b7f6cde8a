//! Pure filtering over ticket snapshots
//!
//! Everything here derives views from a slice of tickets without mutating
//! it. The dashboard composes the status and category filters
//! conjunctively; since both are pure predicates over disjoint fields the
//! order of application does not matter.

use crate::core::{Category, Status, Ticket};

/// Status criterion for a dashboard view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Keep every ticket
    #[default]
    All,
    /// Keep tickets in exactly this status
    Only(Status),
}

/// Category criterion for a dashboard view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Keep every ticket
    #[default]
    All,
    /// Keep tickets in exactly this category
    Only(Category),
}

/// Keeps tickets matching the status criterion; identity for `All`
#[must_use]
pub fn filter_by_status(tickets: &[Ticket], filter: StatusFilter) -> Vec<Ticket> {
    match filter {
        StatusFilter::All => tickets.to_vec(),
        StatusFilter::Only(status) => tickets
            .iter()
            .filter(|t| t.status == status)
            .cloned()
            .collect(),
    }
}

/// Keeps tickets matching the category criterion; identity for `All`
#[must_use]
pub fn filter_by_category(tickets: &[Ticket], filter: CategoryFilter) -> Vec<Ticket> {
    match filter {
        CategoryFilter::All => tickets.to_vec(),
        CategoryFilter::Only(category) => tickets
            .iter()
            .filter(|t| t.category == category)
            .cloned()
            .collect(),
    }
}

/// Combined dashboard filter
///
/// `None` means "no criterion" on that field. Both criteria must hold for
/// a ticket to remain in the result (AND).
#[derive(Debug, Clone, Copy, Default)]
pub struct TicketFilter {
    pub status: Option<Status>,
    pub category: Option<Category>,
}

impl TicketFilter {
    /// Apply the filter to a snapshot, preserving order
    #[must_use]
    pub fn apply(&self, tickets: &[Ticket]) -> Vec<Ticket> {
        tickets
            .iter()
            .filter(|t| self.matches(t))
            .cloned()
            .collect()
    }

    /// Check if a ticket satisfies every active criterion
    fn matches(&self, ticket: &Ticket) -> bool {
        if let Some(status) = self.status {
            if ticket.status != status {
                return false;
            }
        }
        if let Some(category) = self.category {
            if ticket.category != category {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TicketBuilder;

    fn snapshot() -> Vec<Ticket> {
        vec![
            TicketBuilder::new()
                .id("TKT-003")
                .status(Status::Open)
                .category(Category::ItHardware)
                .build(),
            TicketBuilder::new()
                .id("TKT-002")
                .status(Status::InProgress)
                .category(Category::ItSoftware)
                .build(),
            TicketBuilder::new()
                .id("TKT-001")
                .status(Status::Open)
                .category(Category::ItSoftware)
                .build(),
        ]
    }

    #[test]
    fn test_all_is_identity() {
        let tickets = snapshot();
        assert_eq!(filter_by_status(&tickets, StatusFilter::All), tickets);
        assert_eq!(filter_by_category(&tickets, CategoryFilter::All), tickets);
    }

    #[test]
    fn test_filter_by_status_keeps_matches_in_order() {
        let tickets = snapshot();
        let open = filter_by_status(&tickets, StatusFilter::Only(Status::Open));
        assert_eq!(open.len(), 2);
        assert_eq!(open[0].id, "TKT-003");
        assert_eq!(open[1].id, "TKT-001");
    }

    #[test]
    fn test_filter_is_idempotent() {
        let tickets = snapshot();
        let once = filter_by_status(&tickets, StatusFilter::Only(Status::Open));
        let twice = filter_by_status(&once, StatusFilter::Only(Status::Open));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_combined_filter_is_conjunctive_and_commutative() {
        let tickets = snapshot();
        let filter = TicketFilter {
            status: Some(Status::Open),
            category: Some(Category::ItSoftware),
        };
        let combined = filter.apply(&tickets);
        assert_eq!(combined.len(), 1);
        assert_eq!(combined[0].id, "TKT-001");

        // status-then-category equals category-then-status
        let a = filter_by_category(
            &filter_by_status(&tickets, StatusFilter::Only(Status::Open)),
            CategoryFilter::Only(Category::ItSoftware),
        );
        let b = filter_by_status(
            &filter_by_category(&tickets, CategoryFilter::Only(Category::ItSoftware)),
            StatusFilter::Only(Status::Open),
        );
        assert_eq!(a, b);
        assert_eq!(a, combined);
    }

    #[test]
    fn test_filter_does_not_mutate_input() {
        let tickets = snapshot();
        let before = tickets.clone();
        let _ = filter_by_status(&tickets, StatusFilter::Only(Status::Closed));
        let _ = TicketFilter {
            status: Some(Status::Closed),
            category: None,
        }
        .apply(&tickets);
        assert_eq!(tickets, before);
    }
}
