//! Closed enumerations for ticket status, priority and category
//!
//! Wire labels are the Spanish display strings the dashboard UI shows,
//! so a durable slot written by the browser dashboard deserializes
//! unchanged. `FromStr` additionally accepts English keywords for CLI use.

use crate::error::HelpdeskError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Newly created, awaiting triage
    #[serde(rename = "Abierto")]
    Open,
    /// Being worked on
    #[serde(rename = "En progreso")]
    InProgress,
    /// Fixed, awaiting confirmation
    #[serde(rename = "Resuelto")]
    Resolved,
    /// Confirmed done
    #[serde(rename = "Cerrado")]
    Closed,
}

impl Status {
    /// All status values, in lifecycle order
    pub const ALL: [Self; 4] = [Self::Open, Self::InProgress, Self::Resolved, Self::Closed];

    /// Wire/display label for this status
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Abierto",
            Self::InProgress => "En progreso",
            Self::Resolved => "Resuelto",
            Self::Closed => "Cerrado",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Status {
    type Err = HelpdeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" | "abierto" => Ok(Self::Open),
            "in-progress" | "in_progress" | "inprogress" | "en progreso" => Ok(Self::InProgress),
            "resolved" | "resuelto" => Ok(Self::Resolved),
            "closed" | "cerrado" => Ok(Self::Closed),
            _ => Err(HelpdeskError::InvalidInput(format!(
                "Unknown status: '{s}'. Use open, in-progress, resolved or closed"
            ))),
        }
    }
}

/// Urgency of a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "Baja")]
    Low,
    #[serde(rename = "Media")]
    Medium,
    #[serde(rename = "Alta")]
    High,
    #[serde(rename = "Crítica")]
    Critical,
}

impl Priority {
    /// Wire/display label for this priority
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Baja",
            Self::Medium => "Media",
            Self::High => "Alta",
            Self::Critical => "Crítica",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Priority {
    type Err = HelpdeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" | "baja" => Ok(Self::Low),
            "medium" | "media" => Ok(Self::Medium),
            "high" | "alta" => Ok(Self::High),
            "critical" | "crítica" | "critica" => Ok(Self::Critical),
            _ => Err(HelpdeskError::InvalidInput(format!(
                "Unknown priority: '{s}'. Use low, medium, high or critical"
            ))),
        }
    }
}

/// Functional area a ticket belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "IT/Hardware")]
    ItHardware,
    #[serde(rename = "IT/Software")]
    ItSoftware,
    #[serde(rename = "Instalaciones")]
    Facilities,
    #[serde(rename = "RRHH")]
    Hr,
    #[serde(rename = "Otros")]
    Other,
}

impl Category {
    /// Wire/display label for this category
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ItHardware => "IT/Hardware",
            Self::ItSoftware => "IT/Software",
            Self::Facilities => "Instalaciones",
            Self::Hr => "RRHH",
            Self::Other => "Otros",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = HelpdeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "it/hardware" | "hardware" => Ok(Self::ItHardware),
            "it/software" | "software" => Ok(Self::ItSoftware),
            "facilities" | "instalaciones" => Ok(Self::Facilities),
            "hr" | "rrhh" => Ok(Self::Hr),
            "other" | "otros" => Ok(Self::Other),
            _ => Err(HelpdeskError::InvalidInput(format!(
                "Unknown category: '{s}'. Use hardware, software, facilities, hr or other"
            ))),
        }
    }
}
