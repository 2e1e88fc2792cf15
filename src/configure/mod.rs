//! The configuration object produced by bootstrap.
//!
//! # Data Flow
//! ```text
//! custom initializer OR default construction (Configure::with)
//!     → profile merge reads secondary sections
//!     → active profiles recorded
//!     → role manager adjusts BusSettings
//!     → bus factory consumes the final value
//! ```
//!
//! # Design Decisions
//! - Plain data, `Clone + PartialEq` so repeated runs can be compared
//! - Secondary configuration sections stay raw TOML until a reader asks
//!   for a typed view

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::bootstrap::BootstrapContext;
use crate::roles::Role;
use crate::types::TypeUniverse;

/// Bus behavior settings, adjusted by roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusSettings {
    /// Number of message-processing workers.
    pub worker_threads: usize,

    /// Delivery attempts before a message is moved aside.
    pub max_retries: u32,

    /// Drop pending input messages when the bus starts.
    pub purge_on_startup: bool,

    pub transactional: bool,

    pub durable_messages: bool,

    /// Keep a subscription store for published events.
    pub subscription_storage: bool,
}

impl Default for BusSettings {
    fn default() -> Self {
        Self {
            worker_threads: 1,
            max_retries: 5,
            purge_on_startup: false,
            transactional: false,
            durable_messages: true,
            subscription_storage: false,
        }
    }
}

/// Mutable configuration result of one bootstrap run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Configure {
    pub endpoint_name: String,
    pub endpoint_version: String,
    pub universe: TypeUniverse,
    /// Secondary configuration sections, keyed by table name.
    pub sections: toml::Table,
    /// Raw arguments followed by the secondary section's profile names, in
    /// order and with duplicates kept.
    pub profile_args: Vec<String>,
    /// Active profiles selected from `profile_args`.
    pub profiles: Vec<String>,
    /// Roles attached by the role manager.
    pub roles: Vec<Role>,
    pub bus: BusSettings,
}

impl Configure {
    /// Default configuration built from the run's context.
    pub fn with(ctx: &BootstrapContext) -> Self {
        Self {
            endpoint_name: ctx.endpoint_name().to_string(),
            endpoint_version: ctx.endpoint_version().to_string(),
            universe: ctx.universe().clone(),
            sections: ctx.sections().clone(),
            profile_args: Vec::new(),
            profiles: Vec::new(),
            roles: Vec::new(),
            bus: ctx.bus_defaults().clone(),
        }
    }

    /// Typed view of a secondary section. `None` when the section is absent.
    pub fn section<T: DeserializeOwned>(&self, name: &str) -> Option<Result<T, toml::de::Error>> {
        self.sections
            .get(name)
            .map(|value| value.clone().try_into::<T>())
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeUniverse;

    #[derive(Debug, Deserialize)]
    struct Audit {
        queue: String,
    }

    fn ctx_with(sections: &str) -> BootstrapContext {
        let sections: toml::Table = toml::from_str(sections).unwrap();
        BootstrapContext::new("Sales", "1.0.0", TypeUniverse::default()).with_sections(sections)
    }

    #[test]
    fn test_with_copies_context() {
        let config = Configure::with(&ctx_with(""));
        assert_eq!(config.endpoint_name, "Sales");
        assert_eq!(config.endpoint_version, "1.0.0");
        assert!(config.profile_args.is_empty());
        assert!(config.profiles.is_empty());
        assert_eq!(config.bus, BusSettings::default());
    }

    #[test]
    fn test_section_lookup() {
        let config = Configure::with(&ctx_with("[audit]\nqueue = \"audit@host\"\n"));

        let audit: Audit = config.section("audit").unwrap().unwrap();
        assert_eq!(audit.queue, "audit@host");
        assert!(config.section::<Audit>("missing").is_none());
    }

    #[test]
    fn test_malformed_section_is_an_error() {
        let config = Configure::with(&ctx_with("[audit]\nqueue = 3\n"));
        assert!(config.section::<Audit>("audit").unwrap().is_err());
    }
}
