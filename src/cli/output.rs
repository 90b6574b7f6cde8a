//! Terminal output formatting for the helpdesk CLI

use crate::error::Result;
use colored::Colorize;
use serde::Serialize;

/// Formats CLI output as colored text or JSON
pub struct OutputFormatter {
    json: bool,
    no_color: bool,
}

impl OutputFormatter {
    /// Creates a formatter
    #[must_use]
    pub const fn new(json: bool, no_color: bool) -> Self {
        Self { json, no_color }
    }

    /// True when the caller asked for JSON output
    #[must_use]
    pub const fn is_json(&self) -> bool {
        self.json
    }

    /// Prints a success line
    pub fn success(&self, message: &str) {
        if self.no_color {
            println!("✓ {message}");
        } else {
            println!("{} {message}", "✓".green());
        }
    }

    /// Prints an informational line
    pub fn info(&self, message: &str) {
        println!("{message}");
    }

    /// Prints an error line to stderr
    pub fn error(&self, message: &str) {
        if self.no_color {
            eprintln!("✗ {message}");
        } else {
            eprintln!("{} {message}", "✗".red());
        }
    }

    /// Prints a value as pretty JSON
    pub fn print_json<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    /// Renders a status-like badge, colored unless disabled
    #[must_use]
    pub fn badge(&self, label: &str) -> String {
        if self.no_color {
            label.to_string()
        } else {
            label.cyan().to_string()
        }
    }
}
