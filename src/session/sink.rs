//! Status sinks: where lifecycle updates are sent.

use super::status::SessionPhase;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

/// One lifecycle report for a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub session_name: String,
    pub namespace: String,
    pub phase: SessionPhase,
    pub message: String,
    /// Formatted result, only on `Succeeded`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Failure detail, only on `Failed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Persists session status updates.
///
/// Delivery is best effort; callers log failures and carry on.
pub trait StatusSink {
    fn update_status(&self, update: &StatusUpdate) -> Result<()>;
}

/// Sink that only writes updates to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogStatusSink;

impl StatusSink for LogStatusSink {
    fn update_status(&self, update: &StatusUpdate) -> Result<()> {
        info!(
            session = %update.session_name,
            namespace = %update.namespace,
            phase = %update.phase,
            error = update.error.as_deref(),
            "{}",
            update.message
        );
        Ok(())
    }
}
