//! Bootstrap sequencing.

use crate::bootstrap::init::{resolve_initialization, InitOutcome};
use crate::bootstrap::logging::resolve_logging;
use crate::bootstrap::profiles::merge_profile_args;
use crate::bootstrap::validation::validate_universe;
use crate::bootstrap::{BootstrapContext, BootstrapResult};
use crate::capability::{probe, EndpointSpecifier};
use crate::configure::Configure;
use crate::profiles::ProfileCatalog;
use crate::roles::{DefaultRoleManager, RoleManager};

/// Stages of one run, in the only order they can occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BootstrapStage {
    Start,
    LoggingResolved,
    InitAttempted,
    BaseConfigReady,
    ProfilesMerged,
    Validated,
    RoleConfigured,
    Done,
}

/// State of a single run. Dropped with the run, so every run starts clean.
struct BootstrapRun<'a> {
    ctx: &'a BootstrapContext,
    stage: BootstrapStage,
    config: Option<Configure>,
}

impl<'a> BootstrapRun<'a> {
    fn new(ctx: &'a BootstrapContext) -> Self {
        Self {
            ctx,
            stage: BootstrapStage::Start,
            config: None,
        }
    }

    fn advance(&mut self, next: BootstrapStage) {
        debug_assert!(next > self.stage, "bootstrap stages must move forward");
        self.stage = next;
        tracing::trace!(endpoint = %self.ctx.endpoint_name(), stage = ?next, "Bootstrap stage reached");
    }
}

/// Sequences logging, initialization, profile merging, validation and role
/// configuration into one configuration object.
pub struct BootstrapOrchestrator {
    profiles: ProfileCatalog,
    roles: Box<dyn RoleManager>,
}

impl BootstrapOrchestrator {
    pub fn new() -> Self {
        Self {
            profiles: ProfileCatalog::default(),
            roles: Box::new(DefaultRoleManager),
        }
    }

    pub fn with_profiles(mut self, profiles: ProfileCatalog) -> Self {
        self.profiles = profiles;
        self
    }

    pub fn with_role_manager(mut self, roles: Box<dyn RoleManager>) -> Self {
        self.roles = roles;
        self
    }

    pub fn profiles(&self) -> &ProfileCatalog {
        &self.profiles
    }

    /// Run the full sequence. Nothing is returned unless every stage succeeds.
    pub fn run(
        &self,
        specifier: &dyn EndpointSpecifier,
        args: &[String],
        ctx: &BootstrapContext,
    ) -> BootstrapResult<Configure> {
        let mut run = BootstrapRun::new(ctx);
        let capabilities = probe(specifier);

        // 1. logging, selected from the raw arguments
        let startup_profiles = self.profiles.select(args);
        let logging = resolve_logging(specifier, &capabilities, &startup_profiles, ctx)?;
        tracing::debug!(endpoint = %ctx.endpoint_name(), logging = ?logging, "Logging resolved");
        run.advance(BootstrapStage::LoggingResolved);

        // 2. custom initialization
        if let InitOutcome::Custom(config) = resolve_initialization(specifier, &capabilities, ctx)? {
            run.config = Some(config);
        }
        run.advance(BootstrapStage::InitAttempted);

        // 3. default configuration when nothing custom was produced
        let mut config = match run.config.take() {
            Some(config) => config,
            None => Configure::with(ctx),
        };
        run.advance(BootstrapStage::BaseConfigReady);

        // 4. + 5. merged arguments drive the active profiles
        let merged = merge_profile_args(args, &config)?;
        let active = self.profiles.select(&merged);
        config.profiles = active.active_names();
        config.profile_args = merged;
        run.advance(BootstrapStage::ProfilesMerged);

        // 6.
        validate_universe(&config.universe)?;
        run.advance(BootstrapStage::Validated);

        // 7.
        self.roles.configure_roles(specifier, &mut config)?;
        run.advance(BootstrapStage::RoleConfigured);

        run.advance(BootstrapStage::Done);
        tracing::info!(
            endpoint = %config.endpoint_name,
            version = %config.endpoint_version,
            profiles = ?config.profiles,
            roles = ?config.roles,
            "Endpoint configured"
        );
        Ok(config)
    }
}

impl Default for BootstrapOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_order() {
        assert!(BootstrapStage::Start < BootstrapStage::LoggingResolved);
        assert!(BootstrapStage::ProfilesMerged < BootstrapStage::Validated);
        assert!(BootstrapStage::Validated < BootstrapStage::RoleConfigured);
        assert!(BootstrapStage::RoleConfigured < BootstrapStage::Done);
    }
}
