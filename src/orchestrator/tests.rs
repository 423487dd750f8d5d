//! Tests for the orchestrated session lifecycle.

use super::*;
use crate::agent::catalog::AgentDefinition;
use crate::agent::overrides::NoOverrides;
use crate::agent::{AgentCatalog, FALLBACK_AGENT};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use tempfile::TempDir;

#[derive(Default)]
struct RecordingSink {
    updates: RefCell<Vec<StatusUpdate>>,
    fail: bool,
}

impl RecordingSink {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    fn phases(&self) -> Vec<SessionPhase> {
        self.updates.borrow().iter().map(|u| u.phase).collect()
    }

    fn last(&self) -> StatusUpdate {
        self.updates.borrow().last().cloned().unwrap()
    }
}

impl StatusSink for RecordingSink {
    fn update_status(&self, update: &StatusUpdate) -> Result<()> {
        self.updates.borrow_mut().push(update.clone());
        if self.fail {
            return Err(RunnerError::Io("status sink unavailable".to_string()));
        }
        Ok(())
    }
}

struct FakeEngine {
    outcome: std::result::Result<ExecutionResult, String>,
    calls: Cell<usize>,
    task: RefCell<Option<String>>,
    agent: RefCell<Option<String>>,
    parameters: RefCell<BTreeMap<String, String>>,
}

impl FakeEngine {
    fn returning(result: ExecutionResult) -> Self {
        Self::with_outcome(Ok(result))
    }

    fn failing(message: &str) -> Self {
        Self::with_outcome(Err(message.to_string()))
    }

    fn with_outcome(outcome: std::result::Result<ExecutionResult, String>) -> Self {
        Self {
            outcome,
            calls: Cell::new(0),
            task: RefCell::new(None),
            agent: RefCell::new(None),
            parameters: RefCell::new(BTreeMap::new()),
        }
    }
}

impl ExecutionEngine for FakeEngine {
    fn execute(&self, request: &ExecutionRequest<'_>) -> Result<ExecutionResult> {
        self.calls.set(self.calls.get() + 1);
        *self.task.borrow_mut() = Some(request.task.to_string());
        *self.agent.borrow_mut() = Some(request.agent.identifier.clone());
        *self.parameters.borrow_mut() = request.parameters.clone();
        self.outcome.clone().map_err(RunnerError::Execution)
    }
}

#[derive(Default)]
struct FakeTools {
    calls: Cell<usize>,
    fail: bool,
}

impl ToolProtocol for FakeTools {
    fn initialize(&self) -> Result<()> {
        self.calls.set(self.calls.get() + 1);
        if self.fail {
            return Err(RunnerError::Initialization("browser unavailable".to_string()));
        }
        Ok(())
    }
}

static BROWSER_AGENTS: &[AgentDefinition] = &[
    AgentDefinition {
        identifier: "general-purpose",
        display_name: "General Purpose Agent",
        role: "Versatile problem solver",
        competencies: &["research"],
        capabilities: &[("code_execution", true)],
    },
    AgentDefinition {
        identifier: "navigator",
        display_name: "Navigator",
        role: "Browser automation",
        competencies: &["web navigation"],
        capabilities: &[("browser_automation", true), ("web_fetch", true)],
    },
];

fn builtin_registry() -> AgentRegistry {
    AgentRegistry::new(AgentCatalog::builtin(), Box::new(NoOverrides))
}

fn browser_registry() -> AgentRegistry {
    let catalog = AgentCatalog::new(BROWSER_AGENTS, FALLBACK_AGENT).unwrap();
    AgentRegistry::new(catalog, Box::new(NoOverrides))
}

fn request(description: &str, agent: &str, format: OutputFormat) -> RunRequest {
    RunRequest {
        task_file: None,
        task_description: description.to_string(),
        agent: agent.to_string(),
        format,
        environment: Vec::new(),
    }
}

fn run(
    registry: AgentRegistry,
    engine: &FakeEngine,
    sink: &RecordingSink,
    tools: &FakeTools,
    request: RunRequest,
) -> Result<RunOutcome> {
    TaskOrchestrator::new(
        SessionRef::new("review-42", "team-a"),
        registry,
        engine,
        sink,
        tools,
    )
    .run(request)
}

fn done() -> ExecutionResult {
    ExecutionResult {
        output: Some("done".to_string()),
        tokens_used: Some(42),
        ..Default::default()
    }
}

#[test]
fn task_file_run_reports_running_then_succeeded() {
    let dir = TempDir::new().unwrap();
    let task_path = dir.path().join("task.md");
    std::fs::write(&task_path, "do X").unwrap();

    let engine = FakeEngine::returning(done());
    let sink = RecordingSink::default();
    let tools = FakeTools::default();
    let mut req = request("", "taylor", OutputFormat::Text);
    req.task_file = Some(task_path);

    let outcome = run(builtin_registry(), &engine, &sink, &tools, req).unwrap();

    assert_eq!(outcome.formatted, "done");
    assert_eq!(outcome.result.tokens_used, Some(42));
    assert_eq!(engine.task.borrow().as_deref(), Some("do X"));
    assert_eq!(sink.phases(), [SessionPhase::Running, SessionPhase::Succeeded]);

    let succeeded = sink.last();
    assert_eq!(succeeded.output.as_deref(), Some("done"));
    assert_eq!(succeeded.error, None);
    assert_eq!(succeeded.session_name, "review-42");
    assert_eq!(succeeded.namespace, "team-a");
}

#[test]
fn running_report_carries_the_start_message() {
    let engine = FakeEngine::returning(done());
    let sink = RecordingSink::default();
    let tools = FakeTools::default();

    run(
        builtin_registry(),
        &engine,
        &sink,
        &tools,
        request("summarize", "emma", OutputFormat::Text),
    )
    .unwrap();

    let updates = sink.updates.borrow();
    assert_eq!(updates[0].message, "AI task execution started");
    assert_eq!(updates[0].output, None);
    assert_eq!(updates[1].message, "Task completed successfully");
}

#[test]
fn empty_task_is_a_validation_failure() {
    let engine = FakeEngine::returning(done());
    let sink = RecordingSink::default();
    let tools = FakeTools::default();

    let err = run(
        builtin_registry(),
        &engine,
        &sink,
        &tools,
        request("", "taylor", OutputFormat::Json),
    )
    .unwrap_err();

    assert!(matches!(err, RunnerError::Validation(_)));
    assert_eq!(engine.calls.get(), 0);
    assert_eq!(sink.phases(), [SessionPhase::Running, SessionPhase::Failed]);
    assert_eq!(
        sink.last().error.as_deref(),
        Some("No task description provided")
    );
}

#[test]
fn whitespace_only_task_is_rejected() {
    let engine = FakeEngine::returning(done());
    let sink = RecordingSink::default();
    let tools = FakeTools::default();

    let err = run(
        builtin_registry(),
        &engine,
        &sink,
        &tools,
        request(" \n\t", "taylor", OutputFormat::Json),
    )
    .unwrap_err();
    assert!(matches!(err, RunnerError::Validation(_)));
}

#[test]
fn engine_error_is_reported_and_propagated() {
    let engine = FakeEngine::failing("boom");
    let sink = RecordingSink::default();
    let tools = FakeTools::default();

    let err = run(
        builtin_registry(),
        &engine,
        &sink,
        &tools,
        request("do X", "taylor", OutputFormat::Json),
    )
    .unwrap_err();

    assert!(err.to_string().contains("boom"));
    assert_eq!(err.exit_code(), crate::exit_codes::EXECUTION_FAILURE);
    assert_eq!(sink.phases(), [SessionPhase::Running, SessionPhase::Failed]);

    let failed = sink.last();
    assert_eq!(failed.error.as_deref(), Some("boom"));
    assert_eq!(failed.message, "Task execution failed");
    assert_eq!(failed.output, None);
}

#[test]
fn task_file_takes_precedence_over_description() {
    let dir = TempDir::new().unwrap();
    let task_path = dir.path().join("task.txt");
    std::fs::write(&task_path, "from file").unwrap();

    let engine = FakeEngine::returning(done());
    let sink = RecordingSink::default();
    let tools = FakeTools::default();
    let mut req = request("from environment", "taylor", OutputFormat::Text);
    req.task_file = Some(task_path);

    run(builtin_registry(), &engine, &sink, &tools, req).unwrap();
    assert_eq!(engine.task.borrow().as_deref(), Some("from file"));
}

#[test]
fn unreadable_task_file_is_reported_as_failed() {
    let dir = TempDir::new().unwrap();
    let engine = FakeEngine::returning(done());
    let sink = RecordingSink::default();
    let tools = FakeTools::default();
    let mut req = request("ignored", "taylor", OutputFormat::Text);
    req.task_file = Some(dir.path().join("missing.md"));

    let err = run(builtin_registry(), &engine, &sink, &tools, req).unwrap_err();

    assert!(matches!(err, RunnerError::Io(_)));
    assert!(err.to_string().contains("missing.md"));
    assert_eq!(engine.calls.get(), 0);
    assert_eq!(sink.phases(), [SessionPhase::Running, SessionPhase::Failed]);
}

#[test]
fn unknown_agent_runs_with_fallback() {
    let engine = FakeEngine::returning(done());
    let sink = RecordingSink::default();
    let tools = FakeTools::default();

    let outcome = run(
        builtin_registry(),
        &engine,
        &sink,
        &tools,
        request("do X", "no-such-agent", OutputFormat::Text),
    )
    .unwrap();

    assert_eq!(outcome.agent, FALLBACK_AGENT);
    assert_eq!(engine.agent.borrow().as_deref(), Some(FALLBACK_AGENT));
}

#[test]
fn browser_agent_initializes_tools_before_execution() {
    let engine = FakeEngine::returning(done());
    let sink = RecordingSink::default();
    let tools = FakeTools::default();

    run(
        browser_registry(),
        &engine,
        &sink,
        &tools,
        request("open the dashboard", "navigator", OutputFormat::Text),
    )
    .unwrap();

    assert_eq!(tools.calls.get(), 1);
    assert_eq!(engine.calls.get(), 1);
}

#[test]
fn agents_without_browser_capability_skip_tool_init() {
    let engine = FakeEngine::returning(done());
    let sink = RecordingSink::default();
    let tools = FakeTools::default();

    run(
        builtin_registry(),
        &engine,
        &sink,
        &tools,
        request("do X", "stella", OutputFormat::Text),
    )
    .unwrap();

    assert_eq!(tools.calls.get(), 0);
}

#[test]
fn tool_init_failure_is_terminal() {
    let engine = FakeEngine::returning(done());
    let sink = RecordingSink::default();
    let tools = FakeTools {
        fail: true,
        ..Default::default()
    };

    let err = run(
        browser_registry(),
        &engine,
        &sink,
        &tools,
        request("open the dashboard", "navigator", OutputFormat::Text),
    )
    .unwrap_err();

    assert!(matches!(err, RunnerError::Initialization(_)));
    assert_eq!(engine.calls.get(), 0);
    assert_eq!(sink.phases(), [SessionPhase::Running, SessionPhase::Failed]);
    assert!(sink.last().error.unwrap().contains("browser unavailable"));
}

#[test]
fn sink_failures_do_not_abort_the_run() {
    let engine = FakeEngine::returning(done());
    let sink = RecordingSink::failing();
    let tools = FakeTools::default();

    let outcome = run(
        builtin_registry(),
        &engine,
        &sink,
        &tools,
        request("do X", "taylor", OutputFormat::Text),
    )
    .unwrap();

    assert_eq!(outcome.formatted, "done");
    assert_eq!(sink.phases(), [SessionPhase::Running, SessionPhase::Succeeded]);
}

#[test]
fn param_entries_reach_the_engine() {
    let engine = FakeEngine::returning(done());
    let sink = RecordingSink::default();
    let tools = FakeTools::default();
    let mut req = request("do X", "taylor", OutputFormat::Text);
    req.environment = vec![
        ("PARAM_Repo".to_string(), "vteam".to_string()),
        ("HOME".to_string(), "/root".to_string()),
    ];

    run(builtin_registry(), &engine, &sink, &tools, req).unwrap();

    assert_eq!(
        *engine.parameters.borrow(),
        BTreeMap::from([("repo".to_string(), "vteam".to_string())])
    );
}

#[test]
fn markdown_output_is_sent_with_success() {
    let engine = FakeEngine::returning(done());
    let sink = RecordingSink::default();
    let tools = FakeTools::default();

    let outcome = run(
        builtin_registry(),
        &engine,
        &sink,
        &tools,
        request("design the cache", "archie", OutputFormat::Markdown),
    )
    .unwrap();

    assert!(outcome.formatted.contains("- **Session**: review-42"));
    assert!(outcome.formatted.contains("- **Agent**: archie"));
    assert!(outcome.formatted.contains("## Task\ndesign the cache"));
    assert_eq!(sink.last().output, Some(outcome.formatted));
}

#[test]
fn json_output_is_the_serialized_result() {
    let engine = FakeEngine::returning(done());
    let sink = RecordingSink::default();
    let tools = FakeTools::default();

    let outcome = run(
        builtin_registry(),
        &engine,
        &sink,
        &tools,
        request("do X", "taylor", OutputFormat::Json),
    )
    .unwrap();

    let parsed: ExecutionResult = serde_json::from_str(&outcome.formatted).unwrap();
    assert_eq!(parsed, done());
}

#[test]
fn long_tasks_are_truncated_in_previews() {
    let task = "x".repeat(250);
    let shown = preview(&task);
    assert_eq!(shown.len(), 203);
    assert!(shown.ends_with("..."));
    assert_eq!(preview("short"), "short");
}
