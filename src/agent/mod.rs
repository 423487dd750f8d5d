//! Agent capability registry.
//!
//! - **Catalog**: the closed table of 17 built-in agent definitions
//! - **Capabilities**: capability flags and the tools they grant
//! - **Overrides**: optional per-agent YAML documents supplying prompts
//! - **Prompts**: default prompt synthesis
//! - **Registry**: identifier resolution with fallback and memoization

pub mod capabilities;
pub mod catalog;
pub mod overrides;
mod profile;
pub mod prompts;
mod registry;

pub use capabilities::BROWSER_AUTOMATION;
pub use catalog::{AgentCatalog, FALLBACK_AGENT};
pub use overrides::FileOverrideSource;
pub use profile::AgentProfile;
pub use registry::AgentRegistry;
