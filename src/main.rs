//! session-runner: executes one AI agent task for a session and reports its
//! lifecycle.
//!
//! This is the main entry point. It initializes logging, parses arguments,
//! dispatches to the command handler, and maps errors to exit codes.

mod agent;
mod cli;
mod commands;
mod config;
mod engine;
pub mod error;
pub mod exit_codes;
mod orchestrator;
mod params;
mod session;
mod template;

use cli::Cli;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the formatted result.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse_args();

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
