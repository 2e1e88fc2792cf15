//! Endpoint host startup and install.
//!
//! # Responsibilities
//! - Run the bootstrap sequence for the hosted specifier
//! - Create and start the bus from the resulting configuration
//! - Offer install mode: bootstrap without starting the bus
//!
//! # Design Decisions
//! - Fail fast: any startup error is logged as fatal and returned
//! - Each start or install runs bootstrap from a clean state
//! - The bus starts last (traffic only when configuration is complete)

use thiserror::Error;

use crate::bootstrap::{BootstrapContext, BootstrapError, BootstrapOrchestrator};
use crate::bus::{Bus, BusError, BusFactory};
use crate::capability::EndpointSpecifier;
use crate::configure::Configure;

#[derive(Debug, Error)]
pub enum HostError {
    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),

    #[error(transparent)]
    Bus(#[from] BusError),
}

/// Hosts one endpoint specifier.
pub struct EndpointHost {
    specifier: Box<dyn EndpointSpecifier>,
    args: Vec<String>,
    context: BootstrapContext,
    orchestrator: BootstrapOrchestrator,
    bus_factory: Box<dyn BusFactory>,
    bus: Option<Box<dyn Bus>>,
}

impl EndpointHost {
    pub fn new(
        specifier: Box<dyn EndpointSpecifier>,
        args: Vec<String>,
        context: BootstrapContext,
        bus_factory: Box<dyn BusFactory>,
    ) -> Self {
        Self {
            specifier,
            args,
            context,
            orchestrator: BootstrapOrchestrator::new(),
            bus_factory,
            bus: None,
        }
    }

    pub fn with_orchestrator(mut self, orchestrator: BootstrapOrchestrator) -> Self {
        self.orchestrator = orchestrator;
        self
    }

    pub fn context(&self) -> &BootstrapContext {
        &self.context
    }

    pub fn is_running(&self) -> bool {
        self.bus.as_ref().is_some_and(|bus| bus.is_running())
    }

    /// Bootstrap, create the bus and start it.
    ///
    /// Fails without bootstrapping again while a bus is already running.
    pub fn start(&mut self) -> Result<(), HostError> {
        if let Some(bus) = self.bus.as_ref().filter(|bus| bus.is_running()) {
            return Err(BusError::AlreadyStarted(bus.id()).into());
        }
        self.try_start().map_err(|e| self.fatal(e))
    }

    fn try_start(&mut self) -> Result<(), HostError> {
        let config = self.bootstrap()?;
        let mut bus = self.bus_factory.create(config)?;
        bus.start()?;
        self.bus = Some(bus);
        Ok(())
    }

    /// Stop the bus if it is running.
    pub fn stop(&mut self) -> Result<(), HostError> {
        if let Some(mut bus) = self.bus.take() {
            if bus.is_running() {
                bus.stop()?;
            }
        }
        tracing::info!(endpoint = %self.context.endpoint_name(), "Endpoint stopped");
        Ok(())
    }

    /// Bootstrap through role configuration without starting the bus.
    pub fn install(&self) -> Result<Configure, HostError> {
        let config = self.bootstrap().map_err(|e| self.fatal(e))?;
        tracing::info!(endpoint = %config.endpoint_name, "Endpoint installed");
        Ok(config)
    }

    fn bootstrap(&self) -> Result<Configure, HostError> {
        Ok(self
            .orchestrator
            .run(self.specifier.as_ref(), &self.args, &self.context)?)
    }

    fn fatal(&self, error: HostError) -> HostError {
        tracing::error!(
            fatal = true,
            endpoint = %self.context.endpoint_name(),
            error = %error,
            "Endpoint failed to start"
        );
        error
    }
}
