//! Host configuration subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → HostConfig (validated, immutable)
//!     → BootstrapContext (name, version, bus defaults, secondary sections)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Unknown top-level tables are kept as secondary sections
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{EndpointConfig, HostConfig, LoggingConfig};
pub use validation::{validate_config, ValidationError};
