//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! profile logging configurers
//!     → logging.rs (install the global tracing subscriber)
//!
//! All subsystems emit:
//!     → tracing events with structured fields (endpoint, stage, profiles)
//! ```
//!
//! # Design Decisions
//! - Structured logging via the tracing crate
//! - JSON format for production, pretty format for development profiles
//! - `RUST_LOG` overrides the configured level

pub mod logging;
