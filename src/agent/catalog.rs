//! The closed catalog of built-in agent definitions.
//!
//! The catalog is a constant table; nothing mutates it after process start.
//! Exactly one entry is the designated fallback, used whenever a requested
//! identifier is not part of the table.

/// Identifier of the agent used when a request names an unknown agent.
pub const FALLBACK_AGENT: &str = "general-purpose";

/// A static agent definition, before prompts and tools are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentDefinition {
    pub identifier: &'static str,
    pub display_name: &'static str,
    pub role: &'static str,
    /// Capability-area labels. Informational only.
    pub competencies: &'static [&'static str],
    /// Declared capability flags; absent names count as `false`.
    pub capabilities: &'static [(&'static str, bool)],
}

const BUILTIN_AGENTS: &[AgentDefinition] = &[
    AgentDefinition {
        identifier: "general-purpose",
        display_name: "General Purpose Agent",
        role: "Versatile problem solver",
        competencies: &["research", "code generation", "analysis"],
        capabilities: &[("multi_step", true), ("code_execution", true)],
    },
    AgentDefinition {
        identifier: "emma",
        display_name: "Emma (Engineering Manager)",
        role: "Team wellbeing and strategic planning",
        competencies: &["team management", "capacity planning", "technical excellence"],
        capabilities: &[("planning", true), ("coordination", true)],
    },
    AgentDefinition {
        identifier: "olivia",
        display_name: "Olivia (Product Owner)",
        role: "Backlog management and sprint execution",
        competencies: &["story refinement", "acceptance criteria", "scope negotiation"],
        capabilities: &[("requirements", true), ("prioritization", true)],
    },
    AgentDefinition {
        identifier: "diego",
        display_name: "Diego (Program Manager)",
        role: "Documentation program management",
        competencies: &["content roadmap", "resource allocation", "delivery coordination"],
        capabilities: &[("documentation", true), ("planning", true)],
    },
    AgentDefinition {
        identifier: "ryan",
        display_name: "Ryan (UX Researcher)",
        role: "User insights and evidence-based design",
        competencies: &["user research", "usability testing", "design recommendations"],
        capabilities: &[("research", true), ("web_search", true)],
    },
    AgentDefinition {
        identifier: "taylor",
        display_name: "Taylor (Team Member)",
        role: "Pragmatic implementation and code quality",
        competencies: &["development", "technical debt assessment", "story estimation"],
        capabilities: &[("code_execution", true), ("testing", true)],
    },
    AgentDefinition {
        identifier: "felix",
        display_name: "Felix (UX Feature Lead)",
        role: "Component design and accessibility",
        competencies: &["feature design", "component specification", "accessibility"],
        capabilities: &[("design", true), ("web_fetch", true)],
    },
    AgentDefinition {
        identifier: "phoenix",
        display_name: "Phoenix (PXE Specialist)",
        role: "Product experience engineering",
        competencies: &["customer impact", "lifecycle management", "field insights"],
        capabilities: &[("telemetry", true), ("web_search", true)],
    },
    AgentDefinition {
        identifier: "terry",
        display_name: "Terry (Technical Writer)",
        role: "User-centered documentation",
        competencies: &["documentation", "procedure testing", "technical communication"],
        capabilities: &[("documentation", true), ("testing", true)],
    },
    AgentDefinition {
        identifier: "uma",
        display_name: "Uma (UX Team Lead)",
        role: "Design quality and team coordination",
        competencies: &["design process", "critique facilitation", "design system"],
        capabilities: &[("design", true), ("coordination", true)],
    },
    AgentDefinition {
        identifier: "parker",
        display_name: "Parker (Product Manager)",
        role: "Market strategy and business value",
        competencies: &["product roadmap", "competitive analysis", "requirements"],
        capabilities: &[("strategy", true), ("web_search", true)],
    },
    AgentDefinition {
        identifier: "jack",
        display_name: "Jack (Delivery Owner)",
        role: "Cross-team coordination and milestones",
        competencies: &["release planning", "risk mitigation", "status reporting"],
        capabilities: &[("coordination", true), ("tracking", true)],
    },
    AgentDefinition {
        identifier: "sam",
        display_name: "Sam (Scrum Master)",
        role: "Agile facilitation and process optimization",
        competencies: &["sprint planning", "retrospectives", "process improvement"],
        capabilities: &[("facilitation", true), ("process", true)],
    },
    AgentDefinition {
        identifier: "archie",
        display_name: "Archie (Architect)",
        role: "System design and technical vision",
        competencies: &["architecture", "technology strategy", "technical planning"],
        capabilities: &[("design", true), ("web_search", true)],
    },
    AgentDefinition {
        identifier: "lee",
        display_name: "Lee (Team Lead)",
        role: "Team coordination and technical decisions",
        competencies: &["sprint leadership", "technical planning", "communication"],
        capabilities: &[("coordination", true), ("code_review", true)],
    },
    AgentDefinition {
        identifier: "casey",
        display_name: "Casey (Content Strategist)",
        role: "Information architecture and content standards",
        competencies: &["content taxonomy", "style guidelines", "content measurement"],
        capabilities: &[("content", true), ("web_search", true)],
    },
    AgentDefinition {
        identifier: "stella",
        display_name: "Stella (Staff Engineer)",
        role: "Technical leadership and implementation excellence",
        competencies: &["technical problems", "code review", "mentoring"],
        capabilities: &[("code_execution", true), ("architecture", true)],
    },
];

/// Read-only lookup over a table of agent definitions.
#[derive(Debug, Clone, Copy)]
pub struct AgentCatalog {
    entries: &'static [AgentDefinition],
    fallback: &'static AgentDefinition,
}

impl AgentCatalog {
    /// The built-in catalog of 17 agents, with `general-purpose` as fallback.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_AGENTS,
            fallback: &BUILTIN_AGENTS[0],
        }
    }

    /// Build a catalog over a custom table.
    ///
    /// Returns `None` when `fallback` does not name an entry, so a constructed
    /// catalog can always resolve.
    #[cfg(test)]
    pub fn new(entries: &'static [AgentDefinition], fallback: &str) -> Option<Self> {
        let fallback = entries.iter().find(|d| d.identifier == fallback)?;
        Some(Self { entries, fallback })
    }

    /// Look up an identifier without falling back.
    pub fn info(&self, identifier: &str) -> Option<&'static AgentDefinition> {
        self.entries.iter().find(|d| d.identifier == identifier)
    }

    /// The designated fallback definition.
    pub fn fallback(&self) -> &'static AgentDefinition {
        self.fallback
    }

    /// Catalog identifiers in declaration order.
    pub fn list_all(&self) -> Vec<&'static str> {
        self.entries.iter().map(|d| d.identifier).collect()
    }
}
