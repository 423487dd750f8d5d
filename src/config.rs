//! Runner configuration read from the environment.
//!
//! The runner is launched inside a job pod, so everything it needs arrives as
//! plain environment variables:
//!
//! | Variable                 | Default     | Meaning                                  |
//! |--------------------------|-------------|------------------------------------------|
//! | `SESSION_NAME`           | `unknown`   | Session whose status is reported         |
//! | `SESSION_NAMESPACE`      | `default`   | Namespace of that session                |
//! | `TASK_DESCRIPTION`       | empty       | Task text when no task file is given     |
//! | `AGENTS_CONFIG_DIR`      | `/agents`   | Directory of `<agent>.yaml` overrides    |
//! | `STATUS_FILE`            | unset       | NDJSON status log; unset logs only       |
//! | `RUNNER_COMMAND`         | `claude -p` | Execution engine command template        |
//! | `RUNNER_MODEL`           | `Unknown`   | Model name reported with results         |
//! | `RUNNER_TIMEOUT_SECONDS` | `3600`      | Engine timeout, must be positive         |
//! | `MCP_INIT_COMMAND`       | unset       | Starts the browser tool integration      |
//! | `OUTPUT_FORMAT`          | unset       | Default output shape                     |
//!
//! `AGENT_TYPE` is read by the command line parser as the `--agent` default.
//! Empty values count as unset.

use crate::error::{Result, RunnerError};
use crate::orchestrator::OutputFormat;
use std::collections::HashMap;
use std::path::PathBuf;

const DEFAULT_SESSION_NAME: &str = "unknown";
const DEFAULT_NAMESPACE: &str = "default";
const DEFAULT_AGENTS_DIR: &str = "/agents";
const DEFAULT_RUNNER_COMMAND: &str = "claude -p";
const DEFAULT_MODEL: &str = "Unknown";
const DEFAULT_TIMEOUT_SECONDS: u64 = 3600;

/// Settings for a single runner invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct RunnerConfig {
    pub session_name: String,
    pub session_namespace: String,
    pub task_description: String,
    pub agents_dir: PathBuf,
    pub status_file: Option<PathBuf>,
    pub runner_command: String,
    pub runner_model: String,
    pub timeout_seconds: u64,
    pub mcp_init_command: Option<String>,
    pub output_format: Option<OutputFormat>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            session_name: DEFAULT_SESSION_NAME.to_string(),
            session_namespace: DEFAULT_NAMESPACE.to_string(),
            task_description: String::new(),
            agents_dir: PathBuf::from(DEFAULT_AGENTS_DIR),
            status_file: None,
            runner_command: DEFAULT_RUNNER_COMMAND.to_string(),
            runner_model: DEFAULT_MODEL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            mcp_init_command: None,
            output_format: None,
        }
    }
}

impl RunnerConfig {
    /// Build the configuration from environment entries.
    ///
    /// Takes a snapshot rather than reading the process environment so callers
    /// (and tests) control exactly what is visible.
    pub fn from_env<I, K, V>(environment: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let env: HashMap<String, String> = environment
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(_, v)| !v.is_empty())
            .collect();
        let get = |key: &str| env.get(key).cloned();
        let defaults = Self::default();

        let timeout_seconds = match get("RUNNER_TIMEOUT_SECONDS") {
            Some(raw) => parse_timeout(&raw)?,
            None => defaults.timeout_seconds,
        };

        Ok(Self {
            session_name: get("SESSION_NAME").unwrap_or(defaults.session_name),
            session_namespace: get("SESSION_NAMESPACE").unwrap_or(defaults.session_namespace),
            task_description: get("TASK_DESCRIPTION").unwrap_or_default(),
            agents_dir: get("AGENTS_CONFIG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.agents_dir),
            status_file: get("STATUS_FILE").map(PathBuf::from),
            runner_command: get("RUNNER_COMMAND").unwrap_or(defaults.runner_command),
            runner_model: get("RUNNER_MODEL").unwrap_or(defaults.runner_model),
            timeout_seconds,
            mcp_init_command: get("MCP_INIT_COMMAND"),
            output_format: get("OUTPUT_FORMAT").map(|raw| OutputFormat::parse_lenient(&raw)),
        })
    }
}

fn parse_timeout(raw: &str) -> Result<u64> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(RunnerError::Config(
            "RUNNER_TIMEOUT_SECONDS must be greater than 0".to_string(),
        )),
        Ok(secs) => Ok(secs),
        Err(e) => Err(RunnerError::Config(format!(
            "RUNNER_TIMEOUT_SECONDS '{}' is not a number of seconds: {}",
            raw, e
        ))),
    }
}

/// Snapshot of the process environment, skipping entries that are not UTF-8.
pub fn process_environment() -> Vec<(String, String)> {
    std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect()
}
