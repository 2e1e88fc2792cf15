//! Custom initialization resolution.
//!
//! A specifier providing both capabilities registers which entry point is
//! explicit. That registration decides whether the initializer runs; it is
//! never guessed. The initializer is invoked at most once per call.

use crate::bootstrap::error::INITIALIZATION_HINT;
use crate::bootstrap::{BootstrapContext, BootstrapError, BootstrapResult};
use crate::capability::{CapabilitySet, DispatchMode, EndpointSpecifier, InitializeError};
use crate::configure::Configure;

/// Result of attempting custom initialization.
#[derive(Debug)]
pub enum InitOutcome {
    /// The initializer ran and produced the configuration.
    Custom(Configure),
    /// Fall back to the default configuration.
    NotProvided,
}

/// Why the initializer was allowed to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dispatch {
    /// Only the initialization capability is declared.
    Direct,
    /// Both declared; initialization registered explicitly.
    ExplicitInitialization,
    /// Both declared; logging registered explicitly.
    ExplicitLogging,
}

fn select_dispatch(capabilities: &CapabilitySet) -> Option<Dispatch> {
    let init = capabilities.initialization?;
    let Some(logging) = capabilities.logging else {
        return Some(Dispatch::Direct);
    };

    if init.mode == DispatchMode::Explicit {
        Some(Dispatch::ExplicitInitialization)
    } else if logging.mode == DispatchMode::Explicit {
        Some(Dispatch::ExplicitLogging)
    } else {
        None
    }
}

/// Attempt the specifier's custom initialization.
pub fn resolve_initialization(
    specifier: &dyn EndpointSpecifier,
    capabilities: &CapabilitySet,
    ctx: &BootstrapContext,
) -> BootstrapResult<InitOutcome> {
    if capabilities.initialization.is_none() {
        return Ok(InitOutcome::NotProvided);
    }

    let Some(dispatch) = select_dispatch(capabilities) else {
        // Both entry points implicit: the specifier relies on logging alone.
        tracing::warn!(
            endpoint = %ctx.endpoint_name(),
            "Logging and initialization both registered implicitly; custom initialization skipped"
        );
        return Ok(InitOutcome::NotProvided);
    };

    let Some(initializer) = specifier.initialization() else {
        return Ok(InitOutcome::NotProvided);
    };

    tracing::debug!(endpoint = %ctx.endpoint_name(), dispatch = ?dispatch, "Running custom initialization");

    match initializer.initialize(ctx) {
        Ok(config) => Ok(InitOutcome::Custom(config)),
        Err(source @ InitializeError::MissingContext { .. }) => {
            Err(BootstrapError::InitializationContext {
                endpoint: ctx.endpoint_name().to_string(),
                hint: INITIALIZATION_HINT,
                source,
            })
        }
        Err(InitializeError::Failed(source)) => Err(BootstrapError::Configurer(source)),
    }
}
