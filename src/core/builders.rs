use super::{Category, Comment, Priority, Status, Ticket, TimelineEvent, User};
use chrono::{DateTime, Utc};

/// Builder for creating Ticket instances
///
/// Used by the seed data and by tests; production tickets come out of
/// [`crate::store::TicketStore::create`], which also writes the timeline.
#[derive(Default)]
pub struct TicketBuilder {
    id: Option<String>,
    title: Option<String>,
    description: Option<String>,
    category: Option<Category>,
    priority: Option<Priority>,
    status: Option<Status>,
    created_by: Option<User>,
    assigned_to: Option<User>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    comments: Vec<Comment>,
    timeline: Vec<TimelineEvent>,
}

impl TicketBuilder {
    /// Create a new ticket builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ticket ID
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the category
    #[must_use]
    pub const fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Set the priority
    #[must_use]
    pub const fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the status
    #[must_use]
    pub const fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the reporter
    #[must_use]
    pub fn created_by(mut self, user: User) -> Self {
        self.created_by = Some(user);
        self
    }

    /// Set the assignee
    #[must_use]
    pub fn assigned_to(mut self, user: User) -> Self {
        self.assigned_to = Some(user);
        self
    }

    /// Set `created_at` timestamp
    #[must_use]
    pub const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Set `updated_at` timestamp
    #[must_use]
    pub const fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    /// Add a single comment
    #[must_use]
    pub fn comment(mut self, comment: Comment) -> Self {
        self.comments.push(comment);
        self
    }

    /// Add a single timeline event
    #[must_use]
    pub fn event(mut self, event: TimelineEvent) -> Self {
        self.timeline.push(event);
        self
    }

    /// Build the ticket
    pub fn build(self) -> Ticket {
        let now = Utc::now();
        let created_at = self.created_at.unwrap_or(now);
        Ticket {
            id: self.id.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            category: self.category.unwrap_or(Category::Other),
            priority: self.priority.unwrap_or(Priority::Medium),
            status: self.status.unwrap_or(Status::Open),
            created_by: self
                .created_by
                .unwrap_or_else(|| User::new("USR-000", "Sin asignar", "nobody@example.com")),
            assigned_to: self.assigned_to,
            created_at,
            updated_at: self.updated_at.unwrap_or(created_at),
            comments: self.comments,
            timeline: self.timeline,
        }
    }
}
