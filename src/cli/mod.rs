//! Command-line interface for the helpdesk core
//!
//! A thin front-end standing in for the dashboard UI: list and filter
//! tickets, show a ticket with its timeline, create tickets, comment,
//! and print dashboard stats.

pub mod handlers;
pub mod output;

use crate::core::{Category, Priority, Status};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormatter;

/// Helpdesk ticket demo CLI
#[derive(Parser)]
#[command(name = "helpdesk", version, about = "Helpdesk ticket store demo")]
pub struct Cli {
    /// Output results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to a YAML configuration file
    #[arg(long, short, global = true, env = "HELPDESK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Deliver results immediately, without the simulated latency
    #[arg(long, global = true)]
    pub no_delay: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// List tickets, optionally filtered by status and/or category
    List {
        /// Keep only tickets in this status
        #[arg(long)]
        status: Option<Status>,
        /// Keep only tickets in this category
        #[arg(long)]
        category: Option<Category>,
    },
    /// Show one ticket with its comments and timeline
    Show {
        /// Ticket id, e.g. TKT-001
        id: String,
    },
    /// Create a new ticket
    Create {
        /// Short summary (5-100 characters)
        #[arg(long)]
        title: String,
        /// Full description (20-1000 characters)
        #[arg(long)]
        description: String,
        /// Functional area
        #[arg(long)]
        category: Category,
        /// Urgency
        #[arg(long, default_value = "medium")]
        priority: Priority,
    },
    /// Add a comment to a ticket
    Comment {
        /// Ticket id, e.g. TKT-001
        id: String,
        /// Comment body (at least 10 characters)
        content: String,
    },
    /// Print dashboard statistics
    Stats,
}
