//! Endpoint specifier capabilities.
//!
//! # Data Flow
//! ```text
//! user specifier type
//!     → descriptor() (tagged registration, decided at construction)
//!     → probe.rs (which handlers exist, implicit or explicit)
//!     → CapabilitySet consumed by the logging and initialization resolvers
//! ```
//!
//! # Design Decisions
//! - Capabilities are opt-in handlers returned as trait objects
//! - Dispatch mode (implicit/explicit) is declared, never inferred
//! - A missing capability is a normal result, not an error

pub mod probe;

use crate::bootstrap::BootstrapContext;
use crate::configure::Configure;
use crate::roles::Role;

pub use probe::{probe, CapabilitySet};

/// Boxed error type returned by user-supplied handlers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Optional capabilities a specifier may opt into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Logging,
    Initialization,
}

/// How a capability entry point is reachable on the specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DispatchMode {
    /// Reachable directly off the concrete type.
    #[default]
    Implicit,
    /// Reachable only through the capability's own trait.
    Explicit,
}

/// A single derived capability record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilityDeclaration {
    pub capability: Capability,
    pub mode: DispatchMode,
}

/// Dispatch modes registered by a specifier when it is constructed.
///
/// Capabilities not mentioned default to [`DispatchMode::Implicit`] when
/// the matching handler exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CapabilityDescriptor {
    pub logging: Option<DispatchMode>,
    pub initialization: Option<DispatchMode>,
}

impl CapabilityDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn logging(mut self, mode: DispatchMode) -> Self {
        self.logging = Some(mode);
        self
    }

    pub fn initialization(mut self, mode: DispatchMode) -> Self {
        self.initialization = Some(mode);
        self
    }
}

/// Errors a custom initializer may report.
#[derive(Debug, thiserror::Error)]
pub enum InitializeError {
    /// Configuration state the initializer depends on was not available yet.
    #[error("required configuration state `{what}` was not available")]
    MissingContext { what: String },

    /// Any other initializer failure.
    #[error(transparent)]
    Failed(BoxError),
}

/// Self-configured logging.
pub trait ConfigureLogging: Send + Sync {
    fn configure_logging(&self) -> Result<(), BoxError>;
}

/// Custom initialization producing the configuration object.
pub trait InitializeEndpoint: Send + Sync {
    fn initialize(&self, ctx: &BootstrapContext) -> Result<Configure, InitializeError>;
}

/// The user's top-level configuration type for one endpoint.
pub trait EndpointSpecifier: Send + Sync {
    /// Endpoint name; the host falls back to the type name.
    fn endpoint_name(&self) -> Option<String> {
        None
    }

    fn descriptor(&self) -> CapabilityDescriptor {
        CapabilityDescriptor::default()
    }

    fn logging(&self) -> Option<&dyn ConfigureLogging> {
        None
    }

    fn initialization(&self) -> Option<&dyn InitializeEndpoint> {
        None
    }

    fn roles(&self) -> Vec<Role> {
        Vec::new()
    }
}
