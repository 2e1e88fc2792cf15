//! Runtime profiles.
//!
//! # Data Flow
//! ```text
//! arguments (raw at startup, merged later)
//!     → ProfileCatalog::select
//!     → ProfileManager (active profiles, argument order)
//!     → default logging configurers / active names on Configure
//! ```
//!
//! # Design Decisions
//! - Profile names are matched exactly; unknown arguments are ignored
//! - A profile named twice is active once
//! - `production` is active when no argument names a profile

use std::fmt;
use std::sync::Arc;

use crate::bootstrap::BootstrapContext;
use crate::capability::{BoxError, EndpointSpecifier};
use crate::config::schema::LoggingConfig;
use crate::observability::logging::{LogFormat, TracingConfigurer};

pub const LITE: &str = "lite";
pub const INTEGRATION: &str = "integration";
pub const PRODUCTION: &str = "production";

/// Default logging setup contributed by a profile.
pub trait LoggingConfigurer: Send + Sync {
    fn configure(
        &self,
        specifier: &dyn EndpointSpecifier,
        ctx: &BootstrapContext,
    ) -> Result<(), BoxError>;
}

/// A named runtime configuration variant.
#[derive(Clone)]
pub struct Profile {
    name: String,
    logging: Arc<dyn LoggingConfigurer>,
}

impl Profile {
    pub fn new(name: impl Into<String>, logging: impl LoggingConfigurer + 'static) -> Self {
        Self {
            name: name.into(),
            logging: Arc::new(logging),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Profile").field("name", &self.name).finish()
    }
}

/// Every profile the host knows about.
#[derive(Debug, Clone)]
pub struct ProfileCatalog {
    profiles: Vec<Profile>,
    fallback: Option<String>,
}

impl ProfileCatalog {
    pub fn empty() -> Self {
        Self {
            profiles: Vec::new(),
            fallback: None,
        }
    }

    /// `lite` and `integration` log in pretty format, `production` in JSON,
    /// unless the logging config forces a format.
    pub fn builtin(logging: &LoggingConfig) -> Self {
        let configurer = |format: LogFormat| TracingConfigurer {
            level: logging.level.clone(),
            format: logging.format.unwrap_or(format),
        };

        Self::empty()
            .register(Profile::new(LITE, configurer(LogFormat::Pretty)))
            .register(Profile::new(INTEGRATION, configurer(LogFormat::Pretty)))
            .register(Profile::new(PRODUCTION, configurer(LogFormat::Json)))
            .with_fallback(PRODUCTION)
    }

    /// Add a profile, replacing any profile of the same name.
    pub fn register(mut self, profile: Profile) -> Self {
        match self.profiles.iter_mut().find(|p| p.name == profile.name) {
            Some(existing) => *existing = profile,
            None => self.profiles.push(profile),
        }
        self
    }

    /// Profile activated when no argument names one.
    pub fn with_fallback(mut self, name: impl Into<String>) -> Self {
        self.fallback = Some(name.into());
        self
    }

    pub fn names(&self) -> Vec<&str> {
        self.profiles.iter().map(|p| p.name.as_str()).collect()
    }

    fn find(&self, name: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    pub fn select(&self, args: &[String]) -> ProfileManager {
        let mut active: Vec<Profile> = Vec::new();
        for arg in args {
            match self.find(arg) {
                Some(profile) if !active.iter().any(|p| p.name == profile.name) => {
                    active.push(profile.clone());
                }
                Some(_) => {}
                None => tracing::trace!(argument = %arg, "Argument does not name a profile"),
            }
        }

        if active.is_empty() {
            if let Some(fallback) = self.fallback.as_deref().and_then(|name| self.find(name)) {
                active.push(fallback.clone());
            }
        }
        ProfileManager { active }
    }
}

impl Default for ProfileCatalog {
    fn default() -> Self {
        Self::builtin(&LoggingConfig::default())
    }
}

/// Active profiles of one selection.
#[derive(Debug, Clone)]
pub struct ProfileManager {
    active: Vec<Profile>,
}

impl ProfileManager {
    pub fn active_names(&self) -> Vec<String> {
        self.active.iter().map(|p| p.name.clone()).collect()
    }

    /// Default logging configurers, in activation order.
    pub fn logging_configurers(&self) -> Vec<Arc<dyn LoggingConfigurer>> {
        self.active.iter().map(|p| Arc::clone(&p.logging)).collect()
    }
}
