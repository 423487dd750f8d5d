//! Browser tool-protocol (MCP) integration.

use super::ToolProtocol;
use crate::error::{Result, RunnerError};
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// Starts the MCP browser integration by running a configured command.
///
/// With no command configured, initialization is a no-op.
#[derive(Debug, Clone, Default)]
pub struct McpIntegration {
    init_command: Option<String>,
}

impl McpIntegration {
    pub fn new(init_command: Option<String>) -> Self {
        Self { init_command }
    }
}

impl ToolProtocol for McpIntegration {
    fn initialize(&self) -> Result<()> {
        let Some(command) = self.init_command.as_deref() else {
            debug!("no MCP init command configured, skipping");
            return Ok(());
        };

        let args = shell_words::split(command).map_err(|e| {
            RunnerError::Initialization(format!("failed to parse MCP init command '{}': {}", command, e))
        })?;
        let Some((program, rest)) = args.split_first() else {
            return Err(RunnerError::Initialization(
                "MCP init command is empty".to_string(),
            ));
        };

        let output = Command::new(program)
            .args(rest)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                RunnerError::Initialization(format!(
                    "failed to run MCP init command '{}': {}",
                    program, e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RunnerError::Initialization(format!(
                "MCP init command exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        info!("MCP integration initialized for browser automation");
        Ok(())
    }
}
