//! Execution engine backed by an agent CLI subprocess.
//!
//! The command template may use `{agent}` and `{model}`. The composed prompt
//! is written to the child's stdin and its stdout becomes the task output.
//! Output streams are captured in temporary files and read back once the
//! command has exited.

use super::{ExecutionEngine, ExecutionRequest, ExecutionResult};
use crate::agent::prompts::{RESPONSE_FORMAT, SYSTEM, TASK_PREFIX};
use crate::config::RunnerConfig;
use crate::error::{Result, RunnerError};
use crate::template::{render_template, vars};
use std::fs::File;
use std::io::{Read, Seek, SeekFrom, Write};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Runs each task through an external agent command.
#[derive(Debug, Clone)]
pub struct CommandEngine {
    command: String,
    model: String,
    timeout: Duration,
}

impl CommandEngine {
    pub fn new(command: impl Into<String>, model: impl Into<String>, timeout: Duration) -> Self {
        Self {
            command: command.into(),
            model: model.into(),
            timeout,
        }
    }

    pub fn from_config(config: &RunnerConfig) -> Self {
        Self::new(
            config.runner_command.clone(),
            config.runner_model.clone(),
            Duration::from_secs(config.timeout_seconds),
        )
    }

    fn command_line(&self, request: &ExecutionRequest<'_>) -> Result<Vec<String>> {
        let variables = vars([
            ("agent", request.agent.identifier.as_str()),
            ("model", self.model.as_str()),
        ]);
        let rendered = render_template(&self.command, &variables)
            .map_err(|e| RunnerError::Config(format!("runner command template: {}", e)))?;

        let args = shell_words::split(&rendered).map_err(|e| {
            RunnerError::Config(format!("failed to parse runner command '{}': {}", rendered, e))
        })?;
        if args.is_empty() {
            return Err(RunnerError::Config(format!(
                "runner command is empty after parsing: '{}'",
                rendered
            )));
        }
        Ok(args)
    }
}

impl ExecutionEngine for CommandEngine {
    fn execute(&self, request: &ExecutionRequest<'_>) -> Result<ExecutionResult> {
        let args = self.command_line(request)?;
        let prompt = compose_prompt(request);
        debug!(program = %args[0], prompt_len = prompt.len(), "spawning runner command");

        let mut stdout_log = capture_file("stdout")?;
        let mut stderr_log = capture_file("stderr")?;

        let start = Instant::now();
        let mut child = Command::new(&args[0])
            .args(&args[1..])
            .stdin(Stdio::piped())
            .stdout(child_stdio(&stdout_log, "stdout")?)
            .stderr(child_stdio(&stderr_log, "stderr")?)
            .spawn()
            .map_err(|e| {
                RunnerError::Execution(format!(
                    "failed to start runner command '{}': {}",
                    args[0], e
                ))
            })?;

        // Detached: a process holding stdin without reading it must not block us.
        if let Some(mut stdin) = child.stdin.take() {
            thread::spawn(move || {
                if let Err(e) = stdin.write_all(prompt.as_bytes()) {
                    debug!(error = %e, "runner command did not read the full prompt");
                }
            });
        }

        let status = wait_with_timeout(&mut child, self.timeout)?;
        let elapsed = start.elapsed();

        let Some(status) = status else {
            return Err(RunnerError::Execution(format!(
                "runner command timed out after {}s",
                self.timeout.as_secs_f64()
            )));
        };
        let stdout = read_capture(&mut stdout_log, "stdout")?;
        if !status.success() {
            let stderr = read_capture(&mut stderr_log, "stderr")?;
            let detail = stderr.trim();
            return Err(RunnerError::Execution(if detail.is_empty() {
                format!("runner command exited with {}", status)
            } else {
                format!("runner command exited with {}: {}", status, detail)
            }));
        }

        info!(elapsed_secs = elapsed.as_secs_f64(), "runner command finished");
        Ok(ExecutionResult {
            output: Some(stdout),
            tokens_used: None,
            execution_time_seconds: Some(elapsed.as_secs_f64()),
            model: Some(self.model.clone()),
        })
    }
}

/// Assemble the prompt sent to the agent: system prompt, prefixed task,
/// parameters, and response format.
pub fn compose_prompt(request: &ExecutionRequest<'_>) -> String {
    let agent = request.agent;
    let mut sections = Vec::new();

    if let Some(system) = agent.prompt(SYSTEM) {
        sections.push(system.to_string());
    }
    sections.push(format!(
        "{}{}",
        agent.prompt(TASK_PREFIX).unwrap_or_default(),
        request.task
    ));
    if !request.parameters.is_empty() {
        let lines: Vec<String> = request
            .parameters
            .iter()
            .map(|(name, value)| format!("- {}: {}", name, value))
            .collect();
        sections.push(format!("Parameters:\n{}", lines.join("\n")));
    }
    if let Some(format) = agent.prompt(RESPONSE_FORMAT) {
        sections.push(format.to_string());
    }

    sections.join("\n\n")
}

/// Anonymous file receiving one of the child's output streams.
///
/// Reading it back never waits on processes the command left running.
fn capture_file(stream: &str) -> Result<File> {
    tempfile::tempfile().map_err(|e| {
        RunnerError::Execution(format!("failed to create {} capture file: {}", stream, e))
    })
}

fn child_stdio(file: &File, stream: &str) -> Result<Stdio> {
    let handle = file.try_clone().map_err(|e| {
        RunnerError::Execution(format!("failed to share {} capture file: {}", stream, e))
    })?;
    Ok(Stdio::from(handle))
}

fn read_capture(file: &mut File, stream: &str) -> Result<String> {
    let mut buf = Vec::new();
    file.seek(SeekFrom::Start(0))
        .and_then(|_| file.read_to_end(&mut buf))
        .map_err(|e| {
            RunnerError::Execution(format!("failed to read runner {}: {}", stream, e))
        })?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Wait for the child, killing it once `timeout` elapses.
///
/// Returns `None` when the child was killed.
fn wait_with_timeout(child: &mut Child, timeout: Duration) -> Result<Option<ExitStatus>> {
    let start = Instant::now();
    let poll_interval = Duration::from_millis(50);

    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok(Some(status)),
            Ok(None) if start.elapsed() >= timeout => {
                let _ = child.kill();
                let _ = child.wait();
                return Ok(None);
            }
            Ok(None) => thread::sleep(poll_interval),
            Err(e) => {
                return Err(RunnerError::Execution(format!(
                    "failed to check runner command status: {}",
                    e
                )));
            }
        }
    }
}
