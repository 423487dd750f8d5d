//! Execution engine contract and its command-line implementation.
//!
//! The orchestrator only depends on [`ExecutionEngine`] and [`ToolProtocol`];
//! [`CommandEngine`] and [`McpIntegration`] are the implementations used by
//! the binary.

mod command;
mod mcp;

pub use command::CommandEngine;
pub use mcp::McpIntegration;

use crate::agent::AgentProfile;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything the engine needs to run one task.
#[derive(Debug, Clone, Copy)]
pub struct ExecutionRequest<'a> {
    pub task: &'a str,
    pub agent: &'a AgentProfile,
    pub parameters: &'a BTreeMap<String, String>,
}

/// What the engine produced. Every field is optional; report defaults are
/// applied when formatting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens_used: Option<u64>,
    #[serde(
        default,
        rename = "execution_time",
        skip_serializing_if = "Option::is_none"
    )]
    pub execution_time_seconds: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// Runs a task with an agent and returns its result.
///
/// Errors carry a human-readable message that is reported verbatim.
pub trait ExecutionEngine {
    fn execute(&self, request: &ExecutionRequest<'_>) -> Result<ExecutionResult>;
}

/// Auxiliary tool-protocol integration (browser tooling).
pub trait ToolProtocol {
    fn initialize(&self) -> Result<()>;
}
