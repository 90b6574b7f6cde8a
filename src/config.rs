//! Configuration for the helpdesk core
//!
//! Zero-config by default: the durable slot lives in the platform data
//! directory and the simulator uses its default delay bounds. A YAML
//! file can override either.

use crate::error::{HelpdeskError, Result};
use crate::latency::LatencySimulator;
use crate::storage::{FileStorage, DEFAULT_SLOT};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Durable slot settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the slot; platform data dir when unset
    pub dir: Option<PathBuf>,
    /// Slot name (file stem of the JSON document)
    pub slot: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: None,
            slot: DEFAULT_SLOT.to_string(),
        }
    }
}

/// Simulated latency settings, inclusive bounds in milliseconds
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            min_ms: 300,
            max_ms: 800,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpdeskConfig {
    pub storage: StorageConfig,
    pub latency: LatencyConfig,
}

impl HelpdeskConfig {
    /// Loads configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            HelpdeskError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;
        let config: Self = serde_yaml::from_str(&content).map_err(|e| {
            HelpdeskError::Config(format!("Failed to parse {}: {e}", path.display()))
        })?;
        Ok(config)
    }

    /// Loads the file when given, otherwise the defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Resolves the directory holding the durable slot
    ///
    /// # Errors
    ///
    /// Fails when no directory is configured and the platform data
    /// directory cannot be determined.
    pub fn storage_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.storage.dir {
            return Ok(dir.clone());
        }
        ProjectDirs::from("com", "helpdesk-demo", "helpdesk")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| {
                HelpdeskError::Config("Could not determine a data directory".to_string())
            })
    }

    /// Builds the file-backed storage slot this config points at
    pub fn open_storage(&self) -> Result<FileStorage> {
        Ok(FileStorage::with_slot(
            self.storage_dir()?,
            &self.storage.slot,
        ))
    }

    /// Builds the latency simulator this config describes
    #[must_use]
    pub fn simulator(&self) -> LatencySimulator {
        LatencySimulator::new(self.latency.min_ms, self.latency.max_ms)
    }
}
