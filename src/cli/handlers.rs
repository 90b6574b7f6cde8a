//! Command handlers for the helpdesk CLI
//!
//! Each handler drives the [`TicketService`] the way the dashboard UI
//! does: form-rule validation first, then the store operation through
//! the simulated backend.

use crate::cli::output::OutputFormatter;
use crate::core::{Category, NewTicket, Priority, Status, Ticket};
use crate::error::Result;
use crate::query::TicketFilter;
use crate::service::TicketService;
use crate::validate;

/// Handle `helpdesk list [--status ..] [--category ..]`
pub async fn handle_list(
    service: &TicketService,
    status: Option<Status>,
    category: Option<Category>,
    output: &OutputFormatter,
) -> Result<()> {
    let filter = TicketFilter { status, category };
    let tickets = if status.is_none() && category.is_none() {
        service.list_all().await?
    } else {
        service.filter(filter).await?
    };

    if output.is_json() {
        return output.print_json(&tickets);
    }

    if tickets.is_empty() {
        output.info("No hay tickets que coincidan");
        return Ok(());
    }

    for ticket in &tickets {
        output.info(&format!(
            "{}  [{}] [{}] {}",
            output.badge(&ticket.id),
            ticket.status,
            ticket.priority,
            ticket.title
        ));
    }
    output.info(&format!("\n{} tickets", tickets.len()));
    Ok(())
}

/// Handle `helpdesk show <id>`
pub async fn handle_show(
    service: &TicketService,
    id: &str,
    output: &OutputFormatter,
) -> Result<()> {
    let Some(ticket) = service.get_by_id(id).await? else {
        output.error(&format!("Ticket no encontrado: {id}"));
        return Ok(());
    };

    if output.is_json() {
        return output.print_json(&ticket);
    }

    print_ticket(&ticket, output);
    Ok(())
}

/// Handle `helpdesk create`
pub async fn handle_create(
    service: &TicketService,
    title: String,
    description: String,
    category: Category,
    priority: Priority,
    output: &OutputFormatter,
) -> Result<()> {
    let new_ticket = NewTicket::new(title, description, category, priority);
    validate::validate_new_ticket(&new_ticket)?;

    let ticket = service.create(new_ticket).await?;
    if output.is_json() {
        return output.print_json(&ticket);
    }
    output.success(&format!("Ticket creado: {} - {}", ticket.id, ticket.title));
    Ok(())
}

/// Handle `helpdesk comment <id> <content>`
pub async fn handle_comment(
    service: &TicketService,
    id: &str,
    content: &str,
    output: &OutputFormatter,
) -> Result<()> {
    validate::validate_comment(content)?;

    let comment = service.add_comment(id, content).await?;
    if output.is_json() {
        return output.print_json(&comment);
    }
    output.success(&format!("Comentario {} añadido a {id}", comment.id));
    Ok(())
}

/// Handle `helpdesk stats`
pub async fn handle_stats(service: &TicketService, output: &OutputFormatter) -> Result<()> {
    let stats = service.dashboard_stats().await?;
    if output.is_json() {
        return output.print_json(&stats);
    }

    output.info(&format!("Total:       {}", stats.total_tickets));
    output.info(&format!("Abiertos:    {}", stats.open_tickets));
    output.info(&format!("En progreso: {}", stats.in_progress_tickets));
    output.info(&format!("Resueltos:   {}", stats.resolved_tickets));
    output.info(&format!("Cerrados:    {}", stats.closed_tickets));
    Ok(())
}

fn print_ticket(ticket: &Ticket, output: &OutputFormatter) {
    output.info(&format!("{}  {}", output.badge(&ticket.id), ticket.title));
    output.info(&format!(
        "Estado: {} | Prioridad: {} | Categoría: {}",
        ticket.status, ticket.priority, ticket.category
    ));
    output.info(&format!("Creado por {}", ticket.created_by.name));
    if let Some(assignee) = &ticket.assigned_to {
        output.info(&format!("Asignado a {}", assignee.name));
    }
    output.info(&format!(
        "Creado: {} | Actualizado: {}",
        ticket.created_at.format("%Y-%m-%d %H:%M"),
        ticket.updated_at.format("%Y-%m-%d %H:%M")
    ));
    output.info("");
    output.info(&ticket.description);

    if !ticket.comments.is_empty() {
        output.info(&format!("\nComentarios ({}):", ticket.comments.len()));
        for comment in &ticket.comments {
            output.info(&format!(
                "  [{}] {}: {}",
                comment.created_at.format("%Y-%m-%d %H:%M"),
                comment.user.name,
                comment.content
            ));
        }
    }

    output.info(&format!("\nHistorial ({}):", ticket.timeline.len()));
    for event in &ticket.timeline {
        output.info(&format!(
            "  [{}] {}",
            event.timestamp.format("%Y-%m-%d %H:%M"),
            event.description
        ));
    }
}
