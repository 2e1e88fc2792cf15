//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Bootstrap → Create bus → Start bus
//!
//! Install (startup.rs):
//!     Bootstrap → Return configuration (bus never created)
//!
//! Shutdown (shutdown.rs, signals.rs):
//!     SIGTERM/SIGINT → Trigger shutdown → Stop bus → Exit
//! ```
//!
//! # Design Decisions
//! - Ordered startup: logging, configuration, validation, roles, then bus
//! - Startup errors are fatal; there is no automatic retry

pub mod configured;
pub mod shutdown;
pub mod signals;
pub mod startup;

pub use configured::ConfiguredSpecifier;
pub use shutdown::{Shutdown, ShutdownReason};
pub use signals::shutdown_on_signal;
pub use startup::{EndpointHost, HostError};
