//! Rendering execution results into the requested output shape.

use crate::engine::ExecutionResult;
use crate::error::{Result, RunnerError};
use crate::template::{render_template, vars};
use chrono::{DateTime, Utc};
use clap::ValueEnum;

const MARKDOWN_TEMPLATE: &str = "# vTeam AI Execution Result

## Session Information
- **Session**: {session}
- **Agent**: {agent}
- **Timestamp**: {timestamp}

## Task
{task}

## Result
{output}

## Metadata
- **Tokens Used**: {tokens_used}
- **Execution Time**: {execution_time}s
- **Model**: {model}
";

const NO_OUTPUT_PLACEHOLDER: &str = "No output generated";
const UNKNOWN_MODEL: &str = "Unknown";

/// Output shape for the final result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON of the raw result.
    Json,
    /// The output text only.
    Text,
    /// A human-readable report.
    Markdown,
    /// Debug rendering, used for unrecognized format names.
    #[value(skip)]
    Raw,
}

impl OutputFormat {
    /// Parse a format name, mapping anything unrecognized to [`OutputFormat::Raw`].
    pub fn parse_lenient(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "text" => OutputFormat::Text,
            "markdown" => OutputFormat::Markdown,
            _ => OutputFormat::Raw,
        }
    }
}

/// Session metadata embedded in the markdown report.
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    pub session: &'a str,
    pub agent: &'a str,
    pub task: &'a str,
}

/// Render `result` in the requested shape, stamping reports with the current time.
pub fn format_output(
    result: &ExecutionResult,
    format: OutputFormat,
    context: &ReportContext<'_>,
) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(result)
            .map_err(|e| RunnerError::Report(format!("JSON serialization failed: {}", e))),
        OutputFormat::Text => Ok(result.output.clone().unwrap_or_default()),
        OutputFormat::Markdown => format_markdown(result, context, Utc::now()),
        OutputFormat::Raw => Ok(format!("{:?}", result)),
    }
}

/// Render the markdown report for a fixed timestamp.
pub fn format_markdown(
    result: &ExecutionResult,
    context: &ReportContext<'_>,
    timestamp: DateTime<Utc>,
) -> Result<String> {
    let variables = vars([
        ("session", context.session.to_string()),
        ("agent", context.agent.to_string()),
        ("timestamp", timestamp.to_rfc3339()),
        ("task", context.task.to_string()),
        (
            "output",
            result
                .output
                .clone()
                .unwrap_or_else(|| NO_OUTPUT_PLACEHOLDER.to_string()),
        ),
        ("tokens_used", result.tokens_used.unwrap_or(0).to_string()),
        (
            "execution_time",
            result.execution_time_seconds.unwrap_or(0.0).to_string(),
        ),
        (
            "model",
            result
                .model
                .clone()
                .unwrap_or_else(|| UNKNOWN_MODEL.to_string()),
        ),
    ]);

    render_template(MARKDOWN_TEMPLATE, &variables)
        .map_err(|e| RunnerError::Report(format!("markdown report: {}", e)))
}
