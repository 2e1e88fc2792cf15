//! Bus creation and lifecycle.
//!
//! # Data Flow
//! ```text
//! final Configure
//!     → BusFactory::create
//!     → Bus::start (host start)
//!     → Bus::stop  (shutdown signal)
//! ```
//!
//! # Design Decisions
//! - The host only sees the traits; transports live behind a factory
//! - The in-process bus tracks lifecycle state and carries no transport

use thiserror::Error;
use uuid::Uuid;

use crate::configure::Configure;

#[derive(Debug, Error)]
pub enum BusError {
    #[error("bus {0} is already started")]
    AlreadyStarted(Uuid),

    #[error("bus {0} is not started")]
    NotStarted(Uuid),

    #[error("invalid bus settings: {0}")]
    InvalidSettings(String),
}

/// A startable bus built from a configuration.
pub trait Bus: Send {
    fn id(&self) -> Uuid;
    fn is_running(&self) -> bool;
    fn start(&mut self) -> Result<(), BusError>;
    fn stop(&mut self) -> Result<(), BusError>;
}

/// Turns the final configuration into a bus.
pub trait BusFactory: Send + Sync {
    fn create(&self, config: Configure) -> Result<Box<dyn Bus>, BusError>;
}

/// Factory for [`InProcessBus`].
#[derive(Debug, Clone, Copy, Default)]
pub struct InProcessBusFactory;

impl BusFactory for InProcessBusFactory {
    fn create(&self, config: Configure) -> Result<Box<dyn Bus>, BusError> {
        if config.bus.worker_threads == 0 {
            return Err(BusError::InvalidSettings(
                "worker_threads must be greater than zero".into(),
            ));
        }
        Ok(Box::new(InProcessBus::new(config)))
    }
}

/// Bus without a transport. Starting and stopping only change state.
#[derive(Debug)]
pub struct InProcessBus {
    id: Uuid,
    config: Configure,
    running: bool,
}

impl InProcessBus {
    pub fn new(config: Configure) -> Self {
        Self {
            id: Uuid::new_v4(),
            config,
            running: false,
        }
    }

    pub fn config(&self) -> &Configure {
        &self.config
    }
}

impl Bus for InProcessBus {
    fn id(&self) -> Uuid {
        self.id
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn start(&mut self) -> Result<(), BusError> {
        if self.running {
            return Err(BusError::AlreadyStarted(self.id));
        }
        self.running = true;
        tracing::info!(
            bus = %self.id,
            endpoint = %self.config.endpoint_name,
            workers = self.config.bus.worker_threads,
            transactional = self.config.bus.transactional,
            "Bus started"
        );
        Ok(())
    }

    fn stop(&mut self) -> Result<(), BusError> {
        if !self.running {
            return Err(BusError::NotStarted(self.id));
        }
        self.running = false;
        tracing::info!(bus = %self.id, endpoint = %self.config.endpoint_name, "Bus stopped");
        Ok(())
    }
}
