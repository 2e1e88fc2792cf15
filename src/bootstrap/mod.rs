//! Endpoint bootstrap subsystem.
//!
//! # Data Flow
//! ```text
//! specifier + raw args + BootstrapContext
//!     → capability probe
//!     → logging.rs (self-configured or profile defaults)
//!     → init.rs (custom Configure, at most one call)
//!     → default Configure when nothing custom was produced
//!     → profiles.rs (args + secondary section)
//!     → validation.rs (type universe constraint)
//!     → role manager
//!     → Configure handed to the bus factory
//! ```
//!
//! # Design Decisions
//! - Single-threaded and synchronous; runs once per host start or install
//! - Every run starts from empty state; no process-wide globals
//! - Fail fast: the first error aborts the run and no partial
//!   configuration escapes
//! - "No custom initialization" is a normal branch, not an error

pub mod context;
pub mod error;
pub mod init;
pub mod logging;
pub mod orchestrator;
pub mod profiles;
pub mod validation;

pub use context::BootstrapContext;
pub use error::{BootstrapError, BootstrapResult};
pub use init::InitOutcome;
pub use logging::LoggingOutcome;
pub use orchestrator::{BootstrapOrchestrator, BootstrapStage};
pub use profiles::{merge_profile_args, PROFILE_SECTION};
pub use validation::validate_universe;
