//! Per-agent override documents.
//!
//! An override is a YAML file named `<agent>.yaml` inside the agents config
//! directory. Only `prompts` is interpreted today; any other keys are kept so
//! future fields do not break older runners.
//!
//! ```yaml
//! prompts:
//!   system: "You are Archie..."
//!   task_prefix: "As Archie, "
//!   response_format: "Answer with a diagram."
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Partial agent configuration read from an override document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AgentOverride {
    /// Replacement prompt set, keyed by prompt role.
    pub prompts: Option<BTreeMap<String, String>>,

    /// Unknown fields preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl AgentOverride {
    /// Parse an override document. A blank or null document is an empty
    /// override.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let parsed: Option<Self> = serde_yaml::from_str(yaml)?;
        Ok(parsed.unwrap_or_default())
    }
}

/// Outcome of looking for an override.
#[derive(Debug, Clone, PartialEq)]
pub enum OverrideLoad {
    Loaded(AgentOverride),
    /// No override exists for this agent.
    Absent,
    /// An override exists but could not be used.
    Unreadable { source: String, reason: String },
}

/// Somewhere override documents can be read from, keyed by agent identifier.
pub trait OverrideSource {
    fn load(&self, agent_id: &str) -> OverrideLoad;
}

/// Reads `<dir>/<agent>.yaml`.
#[derive(Debug, Clone)]
pub struct FileOverrideSource {
    dir: PathBuf,
}

impl FileOverrideSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, agent_id: &str) -> PathBuf {
        self.dir.join(format!("{agent_id}.yaml"))
    }
}

impl OverrideSource for FileOverrideSource {
    fn load(&self, agent_id: &str) -> OverrideLoad {
        let path = self.path_for(agent_id);
        if !path.exists() {
            return OverrideLoad::Absent;
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match AgentOverride::from_yaml(&content) {
                Ok(config) => OverrideLoad::Loaded(config),
                Err(e) => unreadable(&path, e),
            },
            Err(e) => unreadable(&path, e),
        }
    }
}

fn unreadable(path: &Path, reason: impl std::fmt::Display) -> OverrideLoad {
    OverrideLoad::Unreadable {
        source: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// A source with no overrides at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOverrides;

impl OverrideSource for NoOverrides {
    fn load(&self, _agent_id: &str) -> OverrideLoad {
        OverrideLoad::Absent
    }
}
