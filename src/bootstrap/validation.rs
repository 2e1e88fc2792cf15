//! Type universe constraint check.
//!
//! # Responsibilities
//! - Reject concrete types that provide custom initialization without
//!   being endpoint specifiers
//! - Report every offender, not just the first

use crate::bootstrap::{BootstrapError, BootstrapResult};
use crate::types::{TypeDescriptor, TypeUniverse};

/// A type violates the constraint iff it is concrete, initializes, and is not
/// a specifier.
pub fn is_violation(descriptor: &TypeDescriptor) -> bool {
    !descriptor.is_interface() && descriptor.initializes && !descriptor.specifier
}

pub fn validate_universe(universe: &TypeUniverse) -> BootstrapResult<()> {
    let types: Vec<String> = universe
        .iter()
        .filter(|t| is_violation(t))
        .map(|t| t.name.clone())
        .collect();

    if types.is_empty() {
        return Ok(());
    }
    Err(BootstrapError::ConstraintViolation { types })
}
