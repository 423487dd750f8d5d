//! Fully resolved agent profiles.

use super::capabilities::{CapabilityFlags, derive_tools};
use super::catalog::AgentDefinition;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// An agent definition with its prompts and tools resolved.
///
/// Profiles are immutable once built and shared behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentProfile {
    pub identifier: String,
    pub display_name: String,
    pub role: String,
    pub competencies: Vec<String>,
    pub capabilities: CapabilityFlags,
    /// Prompt text keyed by prompt role (`system`, `task_prefix`, `response_format`).
    pub prompts: BTreeMap<String, String>,
    /// Tool identifiers. Ordering carries no meaning.
    pub tools: BTreeSet<&'static str>,
}

impl AgentProfile {
    /// Build a profile from a catalog definition and an already chosen prompt set.
    pub fn from_definition(
        definition: &AgentDefinition,
        prompts: BTreeMap<String, String>,
    ) -> Self {
        let capabilities: CapabilityFlags = definition.capabilities.iter().copied().collect();
        let tools = derive_tools(capabilities.iter());

        Self {
            identifier: definition.identifier.to_string(),
            display_name: definition.display_name.to_string(),
            role: definition.role.to_string(),
            competencies: definition
                .competencies
                .iter()
                .map(|c| c.to_string())
                .collect(),
            capabilities,
            prompts,
            tools,
        }
    }

    pub fn prompt(&self, role: &str) -> Option<&str> {
        self.prompts.get(role).map(String::as_str)
    }
}
