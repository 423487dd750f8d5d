//! Error types for the session runner.
//!
//! Only terminal failures live here. Override-file problems and unknown agent
//! identifiers degrade gracefully and never surface as a `RunnerError`.

use crate::exit_codes;
use thiserror::Error;

/// Terminal failure of a runner invocation.
#[derive(Error, Debug)]
pub enum RunnerError {
    /// The task text was missing or empty.
    #[error("{0}")]
    Validation(String),

    /// The tool-protocol integration failed to start.
    #[error("tool protocol initialization failed: {0}")]
    Initialization(String),

    /// The execution engine raised. The message is kept verbatim.
    #[error("{0}")]
    Execution(String),

    /// An environment or command-line value could not be interpreted.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A file could not be read or written.
    #[error("{0}")]
    Io(String),

    /// The execution result could not be rendered into the requested shape.
    #[error("failed to format result: {0}")]
    Report(String),
}

impl RunnerError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunnerError::Validation(_) => exit_codes::VALIDATION_FAILURE,
            RunnerError::Initialization(_) => exit_codes::INITIALIZATION_FAILURE,
            RunnerError::Execution(_) => exit_codes::EXECUTION_FAILURE,
            RunnerError::Config(_) | RunnerError::Io(_) | RunnerError::Report(_) => {
                exit_codes::USER_ERROR
            }
        }
    }
}

/// Result type alias for runner operations.
pub type Result<T> = std::result::Result<T, RunnerError>;
