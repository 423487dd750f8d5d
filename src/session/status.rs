//! Phase state machine for one session.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    Pending,
    Running,
    Succeeded,
    Failed,
}

impl SessionPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionPhase::Succeeded | SessionPhase::Failed)
    }

    /// Whether a session in `self` may move to `next`.
    pub fn can_transition_to(self, next: SessionPhase) -> bool {
        if self.is_terminal() {
            return false;
        }
        matches!(
            (self, next),
            (SessionPhase::Pending, SessionPhase::Running)
                | (SessionPhase::Running, SessionPhase::Succeeded)
                | (SessionPhase::Running, SessionPhase::Failed)
        )
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionPhase::Pending => write!(f, "Pending"),
            SessionPhase::Running => write!(f, "Running"),
            SessionPhase::Succeeded => write!(f, "Succeeded"),
            SessionPhase::Failed => write!(f, "Failed"),
        }
    }
}

/// A rejected phase change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("illegal session transition from {from} to {to}")]
pub struct TransitionError {
    pub from: SessionPhase,
    pub to: SessionPhase,
}

/// Name and namespace identifying the tracked session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRef {
    pub name: String,
    pub namespace: String,
}

impl SessionRef {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
        }
    }
}

/// Current phase of one session. Starts in `Pending`.
#[derive(Debug, Clone)]
pub struct SessionStatus {
    session: SessionRef,
    phase: SessionPhase,
}

impl SessionStatus {
    pub fn new(session: SessionRef) -> Self {
        Self {
            session,
            phase: SessionPhase::Pending,
        }
    }

    pub fn session(&self) -> &SessionRef {
        &self.session
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Move to `next`, rejecting anything outside the lifecycle.
    pub fn advance(&mut self, next: SessionPhase) -> Result<(), TransitionError> {
        if !self.phase.can_transition_to(next) {
            return Err(TransitionError {
                from: self.phase,
                to: next,
            });
        }
        self.phase = next;
        Ok(())
    }
}
