//! End-to-end scenarios against the ticket store and service
//!
//! These mirror the dashboard's usage: seed or restore a store, create a
//! ticket, comment on it, and read stats and filtered views through the
//! simulated backend.

use helpdesk_core::core::{
    Category, DashboardStats, NewTicket, Priority, Status, TimelineEventKind, User,
};
use helpdesk_core::latency::LatencySimulator;
use helpdesk_core::query::{filter_by_status, StatusFilter, TicketFilter};
use helpdesk_core::service::TicketService;
use helpdesk_core::storage::{FileStorage, MemoryStorage, SnapshotStorage};
use helpdesk_core::store::TicketStore;
use tempfile::TempDir;

fn actor() -> User {
    User::new("USR-010", "Lucía Fernández", "lucia.fernandez@empresa.com")
}

fn empty_store() -> TicketStore {
    let storage = MemoryStorage::new();
    storage.save(&[]).unwrap();
    TicketStore::open(Box::new(storage), actor()).unwrap()
}

fn printer_ticket() -> NewTicket {
    NewTicket::new(
        "Printer broken",
        "The printer on floor 2 is jammed and unusable.",
        Category::ItHardware,
        Priority::High,
    )
}

#[test]
fn first_ticket_in_empty_store_is_tkt_001() {
    let mut store = empty_store();
    let ticket = store.create(printer_ticket());

    assert_eq!(ticket.id, "TKT-001");
    assert_eq!(ticket.status, Status::Open);
    assert_eq!(ticket.timeline.len(), 1);
    assert_eq!(ticket.timeline[0].kind, TimelineEventKind::Created);

    // wire labels follow the original data format
    let json = serde_json::to_value(&ticket).unwrap();
    assert_eq!(json["status"], "Abierto");
    assert_eq!(json["priority"], "Alta");

    let stats = store.compute_stats();
    assert_eq!(stats.total_tickets, 1);
    assert_eq!(stats.open_tickets, 1);
}

#[test]
fn commenting_appends_comment_and_timeline_event() {
    let mut store = empty_store();
    store.create(printer_ticket());

    let content = "Se ha revisado y el problema persiste.";
    assert!(content.chars().count() >= 10);
    let comment = store.add_comment("TKT-001", content).unwrap();
    assert_eq!(comment.ticket_id, "TKT-001");

    let ticket = store.get_by_id("TKT-001").unwrap();
    assert_eq!(ticket.comments.len(), 1);
    assert_eq!(ticket.timeline.len(), 2);
    assert_eq!(
        ticket.timeline.last().unwrap().kind,
        TimelineEventKind::CommentAdded
    );
    assert!(ticket.updated_at >= ticket.created_at);
}

#[test]
fn commenting_on_unknown_ticket_fails_without_mutation() {
    let mut store = empty_store();
    store.create(printer_ticket());
    let before = store.list_all();

    let err = store
        .add_comment("TKT-999", "Comentario sobre un ticket inexistente.")
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(store.list_all(), before);
}

#[test]
fn stats_total_equals_sum_of_status_counts_and_list_len() {
    let mut store = empty_store();
    for i in 0..5 {
        store.create(NewTicket::new(
            format!("Incidencia número {i}"),
            "Descripción suficientemente larga para la incidencia.",
            Category::Other,
            Priority::Low,
        ));
    }

    let stats = store.compute_stats();
    let sum = stats.open_tickets
        + stats.in_progress_tickets
        + stats.resolved_tickets
        + stats.closed_tickets;
    assert_eq!(stats.total_tickets, sum);
    assert_eq!(stats.total_tickets, store.list_all().len());
    assert_eq!(stats, DashboardStats::from_tickets(&store.list_all()));
}

#[test]
fn persisting_then_reloading_restores_equal_content() {
    let dir = TempDir::new().unwrap();

    let original = {
        let storage = FileStorage::new(dir.path());
        storage.save(&[]).unwrap();
        let mut store = TicketStore::open(Box::new(storage), actor()).unwrap();
        store.create(printer_ticket());
        store
            .add_comment("TKT-001", "Se ha revisado y el problema persiste.")
            .unwrap();
        store.list_all()
    };

    // simulate a restart: fresh storage handle over the same slot
    let reopened = TicketStore::open(Box::new(FileStorage::new(dir.path())), actor()).unwrap();
    let restored = reopened.list_all();

    assert_eq!(restored, original);
    assert_eq!(restored[0].created_at, original[0].created_at);
    assert_eq!(
        restored[0].timeline[0].timestamp,
        original[0].timeline[0].timestamp
    );
}

#[test]
fn restart_does_not_reuse_ticket_ids() {
    let dir = TempDir::new().unwrap();

    {
        let storage = FileStorage::new(dir.path());
        storage.save(&[]).unwrap();
        let mut store = TicketStore::open(Box::new(storage), actor()).unwrap();
        store.create(printer_ticket());
    }

    let mut reopened = TicketStore::open(Box::new(FileStorage::new(dir.path())), actor()).unwrap();
    let second = reopened.create(NewTicket::new(
        "Second incident title",
        "Another sufficiently long incident description.",
        Category::ItSoftware,
        Priority::Low,
    ));
    assert_eq!(second.id, "TKT-002");
}

#[test]
fn filtering_already_filtered_view_is_stable() {
    let mut store = empty_store();
    store.create(printer_ticket());
    store.create(NewTicket::new(
        "Another incident title",
        "Another sufficiently long incident description.",
        Category::ItSoftware,
        Priority::Low,
    ));

    let snapshot = store.list_all();
    let once = filter_by_status(&snapshot, StatusFilter::Only(Status::Open));
    let twice = filter_by_status(&once, StatusFilter::Only(Status::Open));
    assert_eq!(once, twice);
}

#[tokio::test]
async fn service_delivers_results_through_the_simulator() {
    let storage = MemoryStorage::new();
    storage.save(&[]).unwrap();
    let store = TicketStore::open(Box::new(storage), actor()).unwrap();
    let service = TicketService::new(store, LatencySimulator::instant());

    let ticket = service.create(printer_ticket()).await.unwrap();
    assert_eq!(ticket.id, "TKT-001");

    let comment = service
        .add_comment(&ticket.id, "Se ha revisado y el problema persiste.")
        .await
        .unwrap();
    assert!(comment.content.chars().count() >= 10);

    let filtered = service
        .filter(TicketFilter {
            status: Some(Status::Open),
            category: Some(Category::ItHardware),
        })
        .await
        .unwrap();
    assert_eq!(filtered.len(), 1);

    let stats = service.dashboard_stats().await.unwrap();
    assert_eq!(stats.total_tickets, 1);
    assert_eq!(stats.open_tickets, 1);

    let err = service
        .add_comment("TKT-999", "Comentario sobre un ticket inexistente.")
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn seeded_store_round_trips_through_the_slot() {
    let dir = TempDir::new().unwrap();

    // first open seeds and persists
    let seeded = TicketStore::open(Box::new(FileStorage::new(dir.path())), actor()).unwrap();
    let first = seeded.list_all();
    assert!(!first.is_empty());

    // second open restores the same content, dates included
    let restored = TicketStore::open(Box::new(FileStorage::new(dir.path())), actor()).unwrap();
    assert_eq!(restored.list_all(), first);
}
