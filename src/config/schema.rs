//! Configuration schema definitions.
//!
//! This module defines the host configuration file structure.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::configure::BusSettings;
use crate::observability::logging::LogFormat;
use crate::roles::Role;

/// Root configuration for the endpoint host.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct HostConfig {
    /// Endpoint identity and roles.
    pub endpoint: EndpointConfig,

    /// Default logging settings used by the built-in profiles.
    pub logging: LoggingConfig,

    /// Base bus settings before roles are applied.
    pub bus: BusSettings,

    /// Every other top-level table, kept as secondary configuration.
    #[serde(flatten)]
    pub sections: toml::Table,
}

/// Endpoint identity.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct EndpointConfig {
    /// Endpoint name; defaults to the specifier's name.
    pub name: Option<String>,

    /// Endpoint version; defaults to the host version.
    pub version: Option<String>,

    /// Roles for the configuration-driven specifier.
    pub roles: Vec<Role>,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    pub level: String,

    /// Forces one output format for every profile.
    pub format: Option<LogFormat>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config() {
        let config: HostConfig = toml::from_str("").unwrap();
        assert_eq!(config, HostConfig::default());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.bus.worker_threads, 1);
    }

    #[test]
    fn test_unknown_tables_become_sections() {
        let config: HostConfig = toml::from_str(
            r#"
            [endpoint]
            name = "Sales"
            roles = ["server", "publisher"]

            [logging]
            format = "json"

            [bus]
            worker_threads = 4

            [endpoint_profiles]
            profiles = "lite, audit"
            "#,
        )
        .unwrap();

        assert_eq!(config.endpoint.name.as_deref(), Some("Sales"));
        assert_eq!(config.endpoint.roles, vec![Role::Server, Role::Publisher]);
        assert_eq!(config.logging.format, Some(LogFormat::Json));
        assert_eq!(config.bus.worker_threads, 4);
        assert!(config.sections.contains_key("endpoint_profiles"));
        assert!(!config.sections.contains_key("bus"));
    }
}
