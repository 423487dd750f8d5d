//! Task execution orchestrator.
//!
//! Drives one session from `Pending` to a terminal phase:
//!
//! 1. Report `Running`
//! 2. Load the task text (task file first, then the ambient description)
//! 3. Resolve the agent profile
//! 4. Start the browser tool integration when the agent needs it
//! 5. Run the task through the execution engine
//! 6. Format the result and report `Succeeded`
//!
//! Any failure in steps 2-6 is reported as `Failed` with the error text and
//! then returned to the caller. Status reporting itself is best effort.

mod format;

#[cfg(test)]
mod tests;

pub use format::{OutputFormat, ReportContext, format_output};

use crate::agent::{AgentRegistry, BROWSER_AUTOMATION};
use crate::engine::{ExecutionEngine, ExecutionRequest, ExecutionResult, ToolProtocol};
use crate::error::{Result, RunnerError};
use crate::params::extract_parameters;
use crate::session::{SessionPhase, SessionRef, SessionStatus, StatusSink, StatusUpdate};
use std::path::PathBuf;
use tracing::{error, info, warn};

const RUNNING_MESSAGE: &str = "AI task execution started";
const SUCCEEDED_MESSAGE: &str = "Task completed successfully";
const FAILED_MESSAGE: &str = "Task execution failed";

/// Characters of the task text echoed to the log.
const TASK_PREVIEW_CHARS: usize = 200;

/// Inputs for one orchestrated run.
#[derive(Debug, Clone)]
pub struct RunRequest {
    /// Task file to read; takes precedence over `task_description`.
    pub task_file: Option<PathBuf>,
    pub task_description: String,
    /// Requested agent identifier.
    pub agent: String,
    pub format: OutputFormat,
    /// Environment snapshot scanned for `PARAM_*` entries.
    pub environment: Vec<(String, String)>,
}

/// A successfully completed run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub result: ExecutionResult,
    /// `result` rendered in the requested format.
    pub formatted: String,
    /// Identifier of the agent that actually ran.
    pub agent: String,
}

/// Runs a single task for a single session.
pub struct TaskOrchestrator<'a> {
    status: SessionStatus,
    registry: AgentRegistry,
    engine: &'a dyn ExecutionEngine,
    sink: &'a dyn StatusSink,
    tools: &'a dyn ToolProtocol,
}

impl<'a> TaskOrchestrator<'a> {
    pub fn new(
        session: SessionRef,
        registry: AgentRegistry,
        engine: &'a dyn ExecutionEngine,
        sink: &'a dyn StatusSink,
        tools: &'a dyn ToolProtocol,
    ) -> Self {
        Self {
            status: SessionStatus::new(session),
            registry,
            engine,
            sink,
            tools,
        }
    }

    /// Run the task to a terminal phase.
    ///
    /// Consumes the orchestrator: a session is driven exactly once.
    pub fn run(mut self, request: RunRequest) -> Result<RunOutcome> {
        info!(
            session = %self.status.session().name,
            agent = %request.agent,
            "starting session runner"
        );
        self.report(SessionPhase::Running, RUNNING_MESSAGE, None, None);

        match self.execute(&request) {
            Ok(outcome) => {
                self.report(
                    SessionPhase::Succeeded,
                    SUCCEEDED_MESSAGE,
                    Some(outcome.formatted.clone()),
                    None,
                );
                info!(phase = %self.status.phase(), "task execution completed successfully");
                Ok(outcome)
            }
            Err(e) => {
                error!(error = %e, "task execution failed");
                self.report(SessionPhase::Failed, FAILED_MESSAGE, None, Some(e.to_string()));
                Err(e)
            }
        }
    }

    fn execute(&mut self, request: &RunRequest) -> Result<RunOutcome> {
        let task = load_task(request)?;
        info!(task = %preview(&task), "loaded task");

        // Unknown identifiers are logged and replaced by the fallback agent.
        let agent = self.registry.resolve(&request.agent).profile;
        info!(agent = %agent.display_name, role = %agent.role, "resolved agent");

        if agent.capabilities.is_enabled(BROWSER_AUTOMATION) {
            self.tools.initialize()?;
        }

        let parameters =
            extract_parameters(request.environment.iter().map(|(k, v)| (k, v.as_str())));
        info!(parameters = parameters.len(), "executing AI task");
        let result = self.engine.execute(&ExecutionRequest {
            task: &task,
            agent: &agent,
            parameters: &parameters,
        })?;

        let context = ReportContext {
            session: &self.status.session().name,
            agent: &agent.identifier,
            task: &task,
        };
        let formatted = format_output(&result, request.format, &context)?;

        Ok(RunOutcome {
            result,
            formatted,
            agent: agent.identifier.clone(),
        })
    }

    /// Advance the local phase and forward the update to the sink.
    ///
    /// Neither an illegal transition nor a sink failure aborts the run.
    fn report(
        &mut self,
        phase: SessionPhase,
        message: &str,
        output: Option<String>,
        error: Option<String>,
    ) {
        if let Err(e) = self.status.advance(phase) {
            warn!(error = %e, "status update not sent");
            return;
        }

        let session = self.status.session();
        let update = StatusUpdate {
            session_name: session.name.clone(),
            namespace: session.namespace.clone(),
            phase,
            message: message.to_string(),
            output,
            error,
        };
        if let Err(e) = self.sink.update_status(&update) {
            warn!(phase = %phase, error = %e, "failed to report session status");
        }
    }
}

/// Read the task text, preferring the task file over the ambient description.
fn load_task(request: &RunRequest) -> Result<String> {
    let task = match &request.task_file {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            RunnerError::Io(format!(
                "failed to read task file '{}': {}",
                path.display(),
                e
            ))
        })?,
        None => request.task_description.clone(),
    };

    if task.trim().is_empty() {
        return Err(RunnerError::Validation(
            "No task description provided".to_string(),
        ));
    }
    Ok(task)
}

fn preview(task: &str) -> String {
    let mut chars = task.chars();
    let head: String = chars.by_ref().take(TASK_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}
