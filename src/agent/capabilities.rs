//! Capability flags and the tools they grant.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Capability that requires the browser tool-protocol integration.
pub const BROWSER_AUTOMATION: &str = "browser_automation";

/// Tools granted by each capability. Capabilities not listed grant nothing.
const CAPABILITY_TOOLS: &[(&str, &[&str])] = &[
    ("code_execution", &["bash", "python-exec", "read", "write", "edit"]),
    ("web_search", &["web_search"]),
    ("web_fetch", &["web_fetch"]),
    ("documentation", &["write", "edit", "read"]),
    ("design", &["diagram", "mockup"]),
    (BROWSER_AUTOMATION, &["mcp_browser"]),
];

/// Capability name to enabled flag. Missing names read as disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CapabilityFlags(BTreeMap<String, bool>);

impl CapabilityFlags {
    pub fn is_enabled(&self, capability: &str) -> bool {
        self.0.get(capability).copied().unwrap_or(false)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(name, enabled)| (name.as_str(), *enabled))
    }
}

impl<'a> FromIterator<(&'a str, bool)> for CapabilityFlags {
    fn from_iter<I: IntoIterator<Item = (&'a str, bool)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, enabled)| (name.to_string(), enabled))
                .collect(),
        )
    }
}

/// Derive the tool set granted by a collection of capability flags.
///
/// Contributions of every enabled flag are unioned; the result does not
/// depend on the order in which flags are visited.
pub fn derive_tools<'a, I>(flags: I) -> BTreeSet<&'static str>
where
    I: IntoIterator<Item = (&'a str, bool)>,
{
    flags
        .into_iter()
        .filter(|(_, enabled)| *enabled)
        .filter_map(|(name, _)| {
            CAPABILITY_TOOLS
                .iter()
                .find(|(capability, _)| *capability == name)
                .map(|(_, tools)| *tools)
        })
        .flatten()
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_execution_and_web_search() {
        let tools = derive_tools([("code_execution", true), ("web_search", true)]);
        let expected: BTreeSet<_> = ["bash", "python-exec", "read", "write", "edit", "web_search"]
            .into_iter()
            .collect();
        assert_eq!(tools, expected);
    }

    #[test]
    fn overlapping_capabilities_are_deduplicated() {
        let tools = derive_tools([("code_execution", true), ("documentation", true)]);
        assert_eq!(tools.len(), 5);
        assert!(tools.contains("python-exec"));
    }

    #[test]
    fn disabled_and_unknown_flags_contribute_nothing() {
        let tools = derive_tools([("design", false), ("planning", true), ("telemetry", true)]);
        assert!(tools.is_empty());
    }

    #[test]
    fn result_is_independent_of_flag_order() {
        let flags = [
            ("design", true),
            ("web_fetch", true),
            ("code_execution", false),
            (BROWSER_AUTOMATION, true),
        ];
        let forward = derive_tools(flags);
        let mut reversed = flags;
        reversed.reverse();
        let mut rotated = flags;
        rotated.rotate_left(2);

        assert_eq!(forward, derive_tools(reversed));
        assert_eq!(forward, derive_tools(rotated));
        assert!(forward.contains("mcp_browser"));
    }

    #[test]
    fn flags_default_to_disabled() {
        let flags: CapabilityFlags = [("web_search", true)].into_iter().collect();
        assert!(flags.is_enabled("web_search"));
        assert!(!flags.is_enabled(BROWSER_AUTOMATION));
        assert_eq!(derive_tools(flags.iter()), derive_tools([("web_search", true)]));
    }
}
