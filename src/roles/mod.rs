//! Endpoint roles.
//!
//! # Data Flow
//! ```text
//! validated Configure + specifier.roles()
//!     → RoleManager::configure_roles (called once, last)
//!     → Configure.roles + adjusted BusSettings
//! ```
//!
//! # Design Decisions
//! - Roles only adjust settings; the bus applies them when it is created
//! - A client endpoint cannot also be a server or publisher

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::capability::EndpointSpecifier;
use crate::configure::Configure;

/// Bundle of endpoint behavior attached after validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Transactional, durable message processing.
    Server,
    /// Non-transactional sender that purges its input on startup.
    Client,
    /// Server that also keeps subscriptions for published events.
    Publisher,
}

#[derive(Debug, Error)]
pub enum RoleError {
    #[error("role {first:?} cannot be combined with role {second:?}")]
    Conflict { first: Role, second: Role },
}

/// Attaches role behavior to a validated configuration.
pub trait RoleManager: Send + Sync {
    fn configure_roles(
        &self,
        specifier: &dyn EndpointSpecifier,
        config: &mut Configure,
    ) -> Result<(), RoleError>;
}

/// Applies [`Role`] settings to the bus configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRoleManager;

impl DefaultRoleManager {
    fn check_conflicts(roles: &[Role]) -> Result<(), RoleError> {
        if !roles.contains(&Role::Client) {
            return Ok(());
        }
        match roles.iter().find(|r| **r != Role::Client) {
            Some(other) => Err(RoleError::Conflict {
                first: Role::Client,
                second: *other,
            }),
            None => Ok(()),
        }
    }
}

impl RoleManager for DefaultRoleManager {
    fn configure_roles(
        &self,
        specifier: &dyn EndpointSpecifier,
        config: &mut Configure,
    ) -> Result<(), RoleError> {
        let mut roles: Vec<Role> = Vec::new();
        for role in specifier.roles() {
            if !roles.contains(&role) {
                roles.push(role);
            }
        }
        Self::check_conflicts(&roles)?;

        for role in &roles {
            match role {
                Role::Server => {
                    config.bus.transactional = true;
                    config.bus.durable_messages = true;
                }
                Role::Publisher => {
                    config.bus.transactional = true;
                    config.bus.durable_messages = true;
                    config.bus.subscription_storage = true;
                }
                Role::Client => {
                    config.bus.transactional = false;
                    config.bus.purge_on_startup = true;
                }
            }
        }

        if roles.is_empty() {
            tracing::info!(endpoint = %config.endpoint_name, "No roles declared; base bus settings kept");
        }
        config.roles = roles;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::BootstrapContext;
    use crate::configure::BusSettings;
    use crate::types::TypeUniverse;

    struct WithRoles(Vec<Role>);
    impl EndpointSpecifier for WithRoles {
        fn roles(&self) -> Vec<Role> {
            self.0.clone()
        }
    }

    fn configure(roles: Vec<Role>) -> Result<Configure, RoleError> {
        let ctx = BootstrapContext::new("Sales", "1.0.0", TypeUniverse::default());
        let mut config = Configure::with(&ctx);
        DefaultRoleManager.configure_roles(&WithRoles(roles), &mut config)?;
        Ok(config)
    }

    #[test]
    fn test_publisher_enables_subscriptions() {
        let config = configure(vec![Role::Publisher]).unwrap();
        assert!(config.bus.transactional);
        assert!(config.bus.subscription_storage);
        assert!(config.has_role(Role::Publisher));
    }

    #[test]
    fn test_client_purges_on_startup() {
        let config = configure(vec![Role::Client, Role::Client]).unwrap();
        assert!(!config.bus.transactional);
        assert!(config.bus.purge_on_startup);
        assert_eq!(config.roles, vec![Role::Client]);
    }

    #[test]
    fn test_client_conflicts_with_server() {
        let err = configure(vec![Role::Server, Role::Client]).unwrap_err();
        assert!(matches!(
            err,
            RoleError::Conflict {
                first: Role::Client,
                second: Role::Server
            }
        ));
    }

    #[test]
    fn test_no_roles_keeps_settings() {
        let config = configure(Vec::new()).unwrap();
        assert_eq!(config.bus, BusSettings::default());
        assert!(config.roles.is_empty());
    }
}
