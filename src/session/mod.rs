//! Session lifecycle tracking and status reporting.
//!
//! A session moves `Pending -> Running -> {Succeeded | Failed}`. The tracker
//! enforces that ordering locally; sinks persist each accepted transition
//! somewhere external.

mod event_log;
mod sink;
mod status;

pub use event_log::EventLogSink;
pub use sink::{LogStatusSink, StatusSink, StatusUpdate};
pub use status::{SessionPhase, SessionRef, SessionStatus};
