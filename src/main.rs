//! Entry point for the helpdesk CLI
//!
//! Parses command-line arguments, opens the ticket service over the
//! configured durable slot, and dispatches to the command handlers.

use clap::Parser;
use helpdesk_core::cli::{handlers, Cli, Commands, OutputFormatter};
use helpdesk_core::config::HelpdeskConfig;
use helpdesk_core::error::{HelpdeskError, Result};
use helpdesk_core::latency::LatencySimulator;
use helpdesk_core::seed;
use helpdesk_core::service::TicketService;
use helpdesk_core::store::TicketStore;
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let formatter = OutputFormatter::new(cli.json, cli.no_color);

    if let Err(e) = run(cli, &formatter).await {
        handle_error(&e, &formatter);
        process::exit(1);
    }
}

/// Open the service and dispatch to the requested command handler
async fn run(cli: Cli, formatter: &OutputFormatter) -> Result<()> {
    let config = HelpdeskConfig::load_or_default(cli.config.as_deref())?;

    let storage = config.open_storage()?;
    let store = TicketStore::open(Box::new(storage), seed::demo_user())?;
    let latency = if cli.no_delay {
        LatencySimulator::instant()
    } else {
        config.simulator()
    };
    let service = TicketService::new(store, latency);

    match cli.command {
        Commands::List { status, category } => {
            handlers::handle_list(&service, status, category, formatter).await
        },
        Commands::Show { id } => handlers::handle_show(&service, &id, formatter).await,
        Commands::Create {
            title,
            description,
            category,
            priority,
        } => {
            handlers::handle_create(&service, title, description, category, priority, formatter)
                .await
        },
        Commands::Comment { id, content } => {
            handlers::handle_comment(&service, &id, &content, formatter).await
        },
        Commands::Stats => handlers::handle_stats(&service, formatter).await,
    }
}

/// Print an error in the caller's chosen format
fn handle_error(error: &HelpdeskError, formatter: &OutputFormatter) {
    if formatter.is_json() {
        let payload = serde_json::json!({
            "status": "error",
            "message": error.to_string(),
        });
        eprintln!("{payload}");
    } else {
        formatter.error(&error.to_string());
    }
}
