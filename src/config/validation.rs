//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (worker count > 0, known log level)
//! - Reject empty endpoint identity fields
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: HostConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::fmt;

use crate::config::schema::HostConfig;

const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// One failed semantic check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

pub fn validate_config(config: &HostConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Some(name) = &config.endpoint.name {
        if name.trim().is_empty() {
            errors.push(ValidationError::new("endpoint.name", "must not be empty"));
        } else if name.chars().any(char::is_whitespace) {
            errors.push(ValidationError::new("endpoint.name", "must not contain whitespace"));
        }
    }

    if let Some(version) = &config.endpoint.version {
        if version.trim().is_empty() {
            errors.push(ValidationError::new("endpoint.version", "must not be empty"));
        }
    }

    if !LEVELS.contains(&config.logging.level.as_str()) {
        errors.push(ValidationError::new(
            "logging.level",
            format!("unknown level `{}`", config.logging.level),
        ));
    }

    if config.bus.worker_threads == 0 {
        errors.push(ValidationError::new("bus.worker_threads", "must be greater than zero"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
