//! Message endpoint host.
//!
//! Bootstraps a user-supplied endpoint specifier into a validated
//! configuration and hands it to a bus.

pub mod bootstrap;
pub mod bus;
pub mod capability;
pub mod config;
pub mod configure;
pub mod lifecycle;
pub mod observability;
pub mod profiles;
pub mod roles;
pub mod types;

pub use bootstrap::{BootstrapContext, BootstrapError, BootstrapOrchestrator};
pub use capability::{
    CapabilityDescriptor, ConfigureLogging, DispatchMode, EndpointSpecifier, InitializeEndpoint,
    InitializeError,
};
pub use config::HostConfig;
pub use configure::Configure;
pub use lifecycle::{EndpointHost, HostError, Shutdown};
