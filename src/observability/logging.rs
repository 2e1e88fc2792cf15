//! Structured logging.
//!
//! # Responsibilities
//! - Install the process-wide tracing subscriber for a profile
//! - Choose pretty or JSON output
//!
//! # Design Decisions
//! - A subscriber that is already installed is left in place, so repeated
//!   bootstrap runs in one process do not fail

use serde::{Deserialize, Serialize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::bootstrap::BootstrapContext;
use crate::capability::{BoxError, EndpointSpecifier};
use crate::profiles::LoggingConfigurer;

/// Output format of the fmt layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Build the filter: `RUST_LOG` when set, otherwise `level`.
pub fn env_filter(level: &str) -> Result<EnvFilter, BoxError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(level)?),
    }
}

/// Install the global subscriber. Returns `false` when one was already set.
pub fn install(format: LogFormat, level: &str) -> Result<bool, BoxError> {
    let filter = env_filter(level)?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
    };

    match installed {
        Ok(()) => Ok(true),
        Err(e) => {
            tracing::debug!(error = %e, "Global subscriber already installed");
            Ok(false)
        }
    }
}

/// Profile logging configurer backed by tracing-subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfigurer {
    pub level: String,
    pub format: LogFormat,
}

impl LoggingConfigurer for TracingConfigurer {
    fn configure(
        &self,
        _specifier: &dyn EndpointSpecifier,
        ctx: &BootstrapContext,
    ) -> Result<(), BoxError> {
        if install(self.format, &self.level)? {
            tracing::info!(
                endpoint = %ctx.endpoint_name(),
                level = %self.level,
                format = ?self.format,
                "Logging initialized"
            );
        }
        Ok(())
    }
}
