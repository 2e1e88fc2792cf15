//! Bootstrap error taxonomy.

use thiserror::Error;

use crate::capability::{BoxError, InitializeError};
use crate::roles::RoleError;

/// Remediation attached to [`BootstrapError::InitializationContext`].
pub const INITIALIZATION_HINT: &str = "split the custom initialization into a separate type that \
     provides only the initialization capability; global configuration state was most likely \
     read before it was ready";

/// Errors that abort a bootstrap run.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// A custom initializer touched configuration state that did not exist yet.
    #[error("custom initialization of endpoint `{endpoint}` failed: {source}. Hint: {hint}")]
    InitializationContext {
        endpoint: String,
        hint: &'static str,
        #[source]
        source: InitializeError,
    },

    /// Types provide the initialization capability without being specifiers.
    #[error(
        "the initialization capability may only be provided by endpoint specifier types; \
         offending types: {}",
        .types.join(", ")
    )]
    ConstraintViolation { types: Vec<String> },

    /// Error raised by a logging configurer or a custom initializer, as-is.
    #[error(transparent)]
    Configurer(BoxError),

    /// The secondary profile section exists but could not be parsed.
    #[error("malformed `{section}` configuration section: {source}")]
    ProfileSection {
        section: String,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Role(#[from] RoleError),
}

/// Result type for bootstrap operations.
pub type BootstrapResult<T> = Result<T, BootstrapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_lists_every_type() {
        let err = BootstrapError::ConstraintViolation {
            types: vec!["a::One".into(), "b::Two".into()],
        };
        assert!(err.to_string().ends_with("offending types: a::One, b::Two"));
    }

    #[test]
    fn test_configurer_error_is_transparent() {
        let inner: BoxError = "disk full".into();
        let err = BootstrapError::Configurer(inner);
        assert_eq!(err.to_string(), "disk full");
    }

    #[test]
    fn test_context_error_carries_hint() {
        let err = BootstrapError::InitializationContext {
            endpoint: "Sales".into(),
            hint: INITIALIZATION_HINT,
            source: InitializeError::MissingContext {
                what: "transport".into(),
            },
        };
        let text = err.to_string();
        assert!(text.contains("`Sales`"));
        assert!(text.contains("`transport`"));
        assert!(text.contains("separate type"));
    }
}
