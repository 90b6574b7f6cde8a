//! Synthetic seed data
//!
//! Populates the store on first run when the durable slot is empty. One
//! synthetic "current user" is the default acting identity; the demo
//! tickets cover the three most common dashboard states.

use crate::core::{
    Category, Comment, Priority, Status, Ticket, TicketBuilder, TimelineEvent, User,
};
use chrono::{Duration, Utc};
use once_cell::sync::Lazy;

static DEMO_USER: Lazy<User> = Lazy::new(|| User {
    id: "USR-001".to_string(),
    name: "Ana López".to_string(),
    email: "ana.lopez@empresa.com".to_string(),
    avatar: Some("https://i.pravatar.cc/150?img=5".to_string()),
});

static SUPPORT_USER: Lazy<User> = Lazy::new(|| User {
    id: "USR-002".to_string(),
    name: "Carlos Ruiz".to_string(),
    email: "carlos.ruiz@empresa.com".to_string(),
    avatar: Some("https://i.pravatar.cc/150?img=12".to_string()),
});

/// The synthetic current user used as the default acting identity
#[must_use]
pub fn demo_user() -> User {
    DEMO_USER.clone()
}

/// The synthetic support agent referenced by the seed tickets
#[must_use]
pub fn support_user() -> User {
    SUPPORT_USER.clone()
}

/// Initial tickets for an empty store, most recent first
#[must_use]
pub fn demo_tickets() -> Vec<Ticket> {
    let reporter = demo_user();
    let agent = support_user();
    let now = Utc::now();

    let t3_created = now - Duration::days(1);
    let ticket3 = TicketBuilder::new()
        .id("TKT-003")
        .title("Solicitud de segundo monitor")
        .description(
            "Necesito un segundo monitor para el puesto 14; trabajo a diario \
             con hojas de cálculo y documentación en paralelo.",
        )
        .category(Category::ItHardware)
        .priority(Priority::Low)
        .status(Status::Open)
        .created_by(reporter.clone())
        .created_at(t3_created)
        .updated_at(t3_created)
        .event(event_at(
            TimelineEvent::created("TKT-003", reporter.clone()),
            t3_created,
        ))
        .build();

    let t2_created = now - Duration::days(3);
    let t2_updated = now - Duration::days(2);
    let t2_comment = {
        let mut comment = Comment::new(
            "TKT-002",
            agent.clone(),
            "Estamos revisando la configuración del servidor de correo.",
        );
        comment.created_at = t2_updated;
        comment
    };
    let ticket2 = TicketBuilder::new()
        .id("TKT-002")
        .title("No puedo enviar correos externos")
        .description(
            "Desde esta mañana los correos a direcciones externas se quedan \
             en la bandeja de salida y devuelven un error de servidor.",
        )
        .category(Category::ItSoftware)
        .priority(Priority::High)
        .status(Status::InProgress)
        .created_by(reporter.clone())
        .assigned_to(agent.clone())
        .created_at(t2_created)
        .updated_at(t2_updated)
        .comment(t2_comment)
        .event(event_at(
            TimelineEvent::created("TKT-002", reporter.clone()),
            t2_created,
        ))
        .event(event_at(
            TimelineEvent::comment_added("TKT-002", agent.clone()),
            t2_updated,
        ))
        .build();

    let t1_created = now - Duration::days(7);
    let t1_updated = now - Duration::days(5);
    let ticket1 = TicketBuilder::new()
        .id("TKT-001")
        .title("Aire acondicionado averiado en sala 3")
        .description(
            "El aire acondicionado de la sala de reuniones 3 no enfría y hace \
             un ruido constante desde la semana pasada.",
        )
        .category(Category::Facilities)
        .priority(Priority::Medium)
        .status(Status::Resolved)
        .created_by(reporter.clone())
        .assigned_to(agent.clone())
        .created_at(t1_created)
        .updated_at(t1_updated)
        .event(event_at(
            TimelineEvent::created("TKT-001", reporter),
            t1_created,
        ))
        .build();

    vec![ticket3, ticket2, ticket1]
}

fn event_at(mut event: TimelineEvent, at: chrono::DateTime<Utc>) -> TimelineEvent {
    event.timestamp = at;
    event
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_tickets_are_most_recent_first() {
        let tickets = demo_tickets();
        assert_eq!(tickets.len(), 3);
        for pair in tickets.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }

    #[test]
    fn test_seed_invariants_hold() {
        for ticket in demo_tickets() {
            assert!(ticket.created_at <= ticket.updated_at);
            for comment in &ticket.comments {
                assert_eq!(comment.ticket_id, ticket.id);
            }
            for event in &ticket.timeline {
                assert_eq!(event.ticket_id, ticket.id);
            }
        }
    }

    #[test]
    fn test_demo_user_is_stable() {
        assert_eq!(demo_user(), demo_user());
    }
}
