//! Append-only NDJSON status log.
//!
//! Each update becomes one JSON object on its own line:
//!
//! ```text
//! {"ts":"2026-01-13T10:00:00Z","reporter":"runner@pod-1","session_name":"demo",
//!  "namespace":"default","phase":"Running","message":"AI task execution started"}
//! ```

use super::sink::{StatusSink, StatusUpdate};
use crate::error::{Result, RunnerError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// A status update stamped with time and reporter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusEvent {
    /// RFC3339 timestamp of the report.
    pub ts: DateTime<Utc>,
    /// `user@host` of the reporting process.
    pub reporter: String,
    #[serde(flatten)]
    pub update: StatusUpdate,
}

impl StatusEvent {
    pub fn new(update: StatusUpdate) -> Self {
        Self {
            ts: Utc::now(),
            reporter: reporter_string(),
            update,
        }
    }

    /// Serialize to a single JSON line.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| RunnerError::Io(format!("failed to serialize status event: {}", e)))
    }
}

fn reporter_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Sink appending every update to an NDJSON file.
#[derive(Debug, Clone)]
pub struct EventLogSink {
    path: PathBuf,
}

impl EventLogSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatusSink for EventLogSink {
    fn update_status(&self, update: &StatusUpdate) -> Result<()> {
        let line = StatusEvent::new(update.clone()).to_ndjson_line()?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| {
                RunnerError::Io(format!(
                    "failed to create status directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                RunnerError::Io(format!(
                    "failed to open status file '{}': {}",
                    self.path.display(),
                    e
                ))
            })?;

        writeln!(file, "{}", line).map_err(|e| {
            RunnerError::Io(format!(
                "failed to write status to '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        file.sync_all().map_err(|e| {
            RunnerError::Io(format!(
                "failed to sync status file '{}': {}",
                self.path.display(),
                e
            ))
        })
    }
}
