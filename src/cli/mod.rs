//! CLI argument parsing for session-runner.
//!
//! Uses clap derive macros. Without a subcommand the runner executes the
//! session's task; `agents` inspects the built-in catalog.

use crate::agent::FALLBACK_AGENT;
use crate::orchestrator::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Run a single AI agent task and report its lifecycle.
///
/// Session identity, the task description and `PARAM_*` run parameters are
/// read from the environment.
#[derive(Parser, Debug)]
#[command(name = "session-runner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub run: RunArgs,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Inspect the agent catalog.
    Agents(AgentsCommand),
}

/// Arguments for running the session's task.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to a file holding the task text (overrides TASK_DESCRIPTION).
    #[arg(long)]
    pub task_file: Option<PathBuf>,

    /// Agent type to use.
    #[arg(long, env = "AGENT_TYPE", default_value = FALLBACK_AGENT)]
    pub agent: String,

    /// Output format (defaults to OUTPUT_FORMAT, then json).
    #[arg(long, value_enum)]
    pub output_format: Option<OutputFormat>,
}

/// Agent catalog subcommands.
#[derive(Parser, Debug)]
pub struct AgentsCommand {
    #[command(subcommand)]
    pub action: AgentsAction,
}

/// Available catalog actions.
#[derive(Subcommand, Debug)]
pub enum AgentsAction {
    /// List catalog agents in catalog order.
    List,

    /// Show the resolved profile for an agent as JSON.
    Show(AgentShowArgs),
}

/// Arguments for `agents show`.
#[derive(Parser, Debug)]
pub struct AgentShowArgs {
    /// Agent identifier; unknown identifiers resolve to the fallback agent.
    pub agent: String,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
