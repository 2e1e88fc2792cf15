//! Specifier driven entirely by the host configuration file.

use crate::capability::EndpointSpecifier;
use crate::config::schema::HostConfig;
use crate::roles::Role;

/// Endpoint specifier used by the `endpoint-host` binary. It provides no
/// optional capabilities, so bootstrap takes the profile-driven paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfiguredSpecifier {
    name: Option<String>,
    roles: Vec<Role>,
}

impl ConfiguredSpecifier {
    pub fn from_config(config: &HostConfig) -> Self {
        Self {
            name: config.endpoint.name.clone(),
            roles: config.endpoint.roles.clone(),
        }
    }
}

impl EndpointSpecifier for ConfiguredSpecifier {
    fn endpoint_name(&self) -> Option<String> {
        self.name.clone()
    }

    fn roles(&self) -> Vec<Role> {
        self.roles.clone()
    }
}
