//! Default prompt synthesis for agents without an override.

use super::catalog::AgentDefinition;
use std::collections::BTreeMap;

pub const SYSTEM: &str = "system";
pub const TASK_PREFIX: &str = "task_prefix";
pub const RESPONSE_FORMAT: &str = "response_format";

const RESPONSE_FORMAT_TEXT: &str =
    "Provide detailed, actionable response based on your expertise.";

/// Build the `system`, `task_prefix` and `response_format` prompts from a
/// definition's name, role and competencies.
pub fn synthetic_prompts(definition: &AgentDefinition) -> BTreeMap<String, String> {
    let system = format!(
        "You are {name}.\n\
         Role: {role}\n\
         Competencies: {competencies}\n\
         \n\
         Your task is to help with the request using your specialized knowledge and capabilities.\n\
         Focus on your area of expertise and provide actionable insights.",
        name = definition.display_name,
        role = definition.role,
        competencies = definition.competencies.join(", "),
    );
    let task_prefix = format!(
        "As {}, I will help you with: ",
        definition.display_name
    );

    BTreeMap::from([
        (SYSTEM.to_string(), system),
        (TASK_PREFIX.to_string(), task_prefix),
        (RESPONSE_FORMAT.to_string(), RESPONSE_FORMAT_TEXT.to_string()),
    ])
}
