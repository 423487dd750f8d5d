//! Agent resolution with fallback and per-session memoization.
//!
//! # Resolution Order
//!
//! 1. A profile already built for the requested identifier in this registry
//! 2. The catalog entry for the requested identifier
//! 3. The catalog fallback (`general-purpose`), with a warning
//!
//! Resolution never fails. Once a profile is built it is reused for the
//! lifetime of the registry, so override documents are read at most once per
//! agent even if they change on disk afterwards.

use super::catalog::{AgentCatalog, AgentDefinition};
use super::overrides::{OverrideLoad, OverrideSource};
use super::profile::AgentProfile;
use super::prompts::synthetic_prompts;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// A resolved agent and whether the request had to fall back.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub profile: Arc<AgentProfile>,
    /// True when the requested identifier is not in the catalog.
    pub fell_back: bool,
}

/// Resolves agent identifiers to profiles for one session.
pub struct AgentRegistry {
    catalog: AgentCatalog,
    overrides: Box<dyn OverrideSource>,
    cache: HashMap<String, Arc<AgentProfile>>,
}

impl AgentRegistry {
    pub fn new(catalog: AgentCatalog, overrides: Box<dyn OverrideSource>) -> Self {
        Self {
            catalog,
            overrides,
            cache: HashMap::new(),
        }
    }

    /// Resolve `identifier` to a profile, substituting the fallback agent for
    /// identifiers outside the catalog.
    pub fn resolve(&mut self, identifier: &str) -> Resolution {
        let (definition, fell_back) = match self.catalog.info(identifier) {
            Some(definition) => (definition, false),
            None => {
                let fallback = self.catalog.fallback();
                warn!(
                    requested = identifier,
                    fallback = fallback.identifier,
                    "unknown agent type, using fallback agent"
                );
                (fallback, true)
            }
        };

        if let Some(profile) = self.cache.get(identifier) {
            return Resolution {
                profile: Arc::clone(profile),
                fell_back,
            };
        }

        let profile = match self.cache.get(definition.identifier) {
            Some(profile) => Arc::clone(profile),
            None => {
                let profile = Arc::new(self.build(definition));
                self.cache
                    .insert(definition.identifier.to_string(), Arc::clone(&profile));
                info!(agent = %profile.display_name, "loaded agent");
                profile
            }
        };

        if fell_back {
            self.cache
                .insert(identifier.to_string(), Arc::clone(&profile));
        }

        Resolution { profile, fell_back }
    }

    /// Build a profile, preferring override prompts over synthesized ones.
    fn build(&self, definition: &AgentDefinition) -> AgentProfile {
        let prompts = match self.overrides.load(definition.identifier) {
            OverrideLoad::Loaded(config) => match config.prompts {
                Some(prompts) => {
                    debug!(agent = definition.identifier, "using override prompts");
                    prompts
                }
                None => synthetic_prompts(definition),
            },
            OverrideLoad::Absent => synthetic_prompts(definition),
            OverrideLoad::Unreadable { source, reason } => {
                error!(
                    agent = definition.identifier,
                    source = %source,
                    reason = %reason,
                    "failed to load agent override, using defaults"
                );
                synthetic_prompts(definition)
            }
        };

        AgentProfile::from_definition(definition, prompts)
    }
}
