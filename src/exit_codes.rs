//! Process exit codes for `session-runner`.
//!
//! - 0: Success
//! - 1: User error (bad configuration, unreadable task file, report failure)
//! - 2: Validation failure (missing or empty task text)
//! - 3: Tool-protocol initialization failure
//! - 4: Execution engine failure

/// The task ran and its result was printed.
pub const SUCCESS: i32 = 0;

/// Configuration, I/O or report formatting problem.
pub const USER_ERROR: i32 = 1;

/// No usable task text was supplied.
pub const VALIDATION_FAILURE: i32 = 2;

/// The auxiliary tool-protocol integration could not be started.
pub const INITIALIZATION_FAILURE: i32 = 3;

/// The execution engine raised while running the task.
pub const EXECUTION_FAILURE: i32 = 4;
