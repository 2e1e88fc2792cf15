//! Logging resolution.

use crate::bootstrap::{BootstrapContext, BootstrapError, BootstrapResult};
use crate::capability::{CapabilitySet, EndpointSpecifier};
use crate::profiles::ProfileManager;

/// Who configured logging for the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggingOutcome {
    /// The specifier configured logging itself.
    SelfConfigured,
    /// The active profiles' default configurers ran; holds how many.
    ProfileDefaults(usize),
}

/// Run the specifier's own logging setup, or every default configurer of the
/// active profiles in order.
pub fn resolve_logging(
    specifier: &dyn EndpointSpecifier,
    capabilities: &CapabilitySet,
    profiles: &ProfileManager,
    ctx: &BootstrapContext,
) -> BootstrapResult<LoggingOutcome> {
    if capabilities.logging.is_some() {
        if let Some(handler) = specifier.logging() {
            handler
                .configure_logging()
                .map_err(BootstrapError::Configurer)?;
            tracing::debug!(endpoint = %ctx.endpoint_name(), "Specifier configured logging");
            return Ok(LoggingOutcome::SelfConfigured);
        }
    }

    let configurers = profiles.logging_configurers();
    for configurer in &configurers {
        configurer
            .configure(specifier, ctx)
            .map_err(BootstrapError::Configurer)?;
    }

    tracing::debug!(
        endpoint = %ctx.endpoint_name(),
        profiles = ?profiles.active_names(),
        "Profile logging configured"
    );
    Ok(LoggingOutcome::ProfileDefaults(configurers.len()))
}
