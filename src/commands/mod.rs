//! Command implementations for session-runner.
//!
//! Routes the parsed CLI to the run handler or the catalog subcommands.

mod agents;
mod run;

use crate::cli::{AgentsAction, Cli, Command};
use crate::error::Result;

/// Dispatch the parsed command line to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        None => run::cmd_run(cli.run),
        Some(Command::Agents(agents)) => match agents.action {
            AgentsAction::List => agents::cmd_agents_list(),
            AgentsAction::Show(args) => agents::cmd_agents_show(args),
        },
    }
}
