//! Implementation of the `agents` catalog commands.

use crate::agent::{AgentCatalog, AgentRegistry, FileOverrideSource};
use crate::cli::AgentShowArgs;
use crate::config::{RunnerConfig, process_environment};
use crate::error::{Result, RunnerError};

/// Print every catalog agent, one per line, in catalog order.
pub fn cmd_agents_list() -> Result<()> {
    print!("{}", render_agent_list(&AgentCatalog::builtin()));
    Ok(())
}

/// Print the resolved profile for an agent, including override prompts.
pub fn cmd_agents_show(args: AgentShowArgs) -> Result<()> {
    let config = RunnerConfig::from_env(process_environment())?;
    let mut registry = AgentRegistry::new(
        AgentCatalog::builtin(),
        Box::new(FileOverrideSource::new(&config.agents_dir)),
    );

    let resolution = registry.resolve(&args.agent);
    if resolution.fell_back {
        eprintln!(
            "Note: '{}' is not a catalog agent; showing '{}'",
            args.agent, resolution.profile.identifier
        );
    }

    let json = serde_json::to_string_pretty(resolution.profile.as_ref())
        .map_err(|e| RunnerError::Report(format!("failed to serialize agent profile: {}", e)))?;
    println!("{}", json);
    Ok(())
}

fn render_agent_list(catalog: &AgentCatalog) -> String {
    let ids = catalog.list_all();
    let width = ids.iter().map(|id| id.len()).max().unwrap_or(0);
    let fallback = catalog.fallback().identifier;

    ids.into_iter()
        .filter_map(|id| catalog.info(id))
        .map(|d| {
            let marker = if d.identifier == fallback {
                " (fallback)"
            } else {
                ""
            };
            format!(
                "{:<width$}  {}{}\n",
                d.identifier,
                d.display_name,
                marker,
                width = width
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_has_one_line_per_agent_in_catalog_order() {
        let catalog = AgentCatalog::builtin();
        let rendered = render_agent_list(&catalog);
        let ids: Vec<&str> = rendered
            .lines()
            .map(|line| line.split_whitespace().next().unwrap())
            .collect();
        assert_eq!(ids, catalog.list_all());
    }

    #[test]
    fn list_marks_the_fallback_agent() {
        let rendered = render_agent_list(&AgentCatalog::builtin());
        let first = rendered.lines().next().unwrap();
        assert!(first.starts_with("general-purpose"));
        assert!(first.ends_with("General Purpose Agent (fallback)"));
        assert_eq!(rendered.matches("(fallback)").count(), 1);
    }
}
