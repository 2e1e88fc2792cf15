//! Capability probing.

use crate::capability::{Capability, CapabilityDeclaration, EndpointSpecifier};

/// Capabilities found on one specifier. At most one declaration per capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CapabilitySet {
    pub logging: Option<CapabilityDeclaration>,
    pub initialization: Option<CapabilityDeclaration>,
}

impl CapabilitySet {
    pub fn declares(&self, capability: Capability) -> bool {
        match capability {
            Capability::Logging => self.logging.is_some(),
            Capability::Initialization => self.initialization.is_some(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.logging.is_none() && self.initialization.is_none()
    }
}

/// Derive the capability set of a specifier.
///
/// A capability counts only when its handler is present; the descriptor
/// supplies the dispatch mode.
pub fn probe(specifier: &dyn EndpointSpecifier) -> CapabilitySet {
    let descriptor = specifier.descriptor();

    let logging = specifier.logging().map(|_| CapabilityDeclaration {
        capability: Capability::Logging,
        mode: descriptor.logging.unwrap_or_default(),
    });
    let initialization = specifier.initialization().map(|_| CapabilityDeclaration {
        capability: Capability::Initialization,
        mode: descriptor.initialization.unwrap_or_default(),
    });

    CapabilitySet {
        logging,
        initialization,
    }
}
