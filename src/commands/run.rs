//! Implementation of the default run command.

use crate::agent::{AgentCatalog, AgentRegistry, FileOverrideSource};
use crate::cli::RunArgs;
use crate::config::{RunnerConfig, process_environment};
use crate::engine::{CommandEngine, McpIntegration};
use crate::error::Result;
use crate::orchestrator::{OutputFormat, RunRequest, TaskOrchestrator};
use crate::session::{EventLogSink, LogStatusSink, SessionRef, StatusSink};
use tracing::info;

/// Run the session's task and print the formatted result to stdout.
///
/// 1. Snapshots the environment and builds the runner configuration
/// 2. Wires the registry, engine, tool integration and status sink
/// 3. Drives the orchestrator to a terminal phase
pub fn cmd_run(args: RunArgs) -> Result<()> {
    let environment = process_environment();
    let config = RunnerConfig::from_env(environment.iter().cloned())?;

    let engine = CommandEngine::from_config(&config);
    let tools = McpIntegration::new(config.mcp_init_command.clone());
    let sink: Box<dyn StatusSink> = match &config.status_file {
        Some(path) => {
            let sink = EventLogSink::new(path);
            info!(path = %sink.path().display(), "appending status updates");
            Box::new(sink)
        }
        None => Box::new(LogStatusSink),
    };
    let registry = AgentRegistry::new(
        AgentCatalog::builtin(),
        Box::new(FileOverrideSource::new(&config.agents_dir)),
    );

    let format = args
        .output_format
        .or(config.output_format)
        .unwrap_or(OutputFormat::Json);

    let orchestrator = TaskOrchestrator::new(
        SessionRef::new(&config.session_name, &config.session_namespace),
        registry,
        &engine,
        sink.as_ref(),
        &tools,
    );
    let outcome = orchestrator.run(RunRequest {
        task_file: args.task_file,
        task_description: config.task_description.clone(),
        agent: args.agent,
        format,
        environment,
    })?;

    info!(
        agent = %outcome.agent,
        seconds = outcome.result.execution_time_seconds.unwrap_or_default(),
        "session finished"
    );
    println!("{}", outcome.formatted);
    Ok(())
}
