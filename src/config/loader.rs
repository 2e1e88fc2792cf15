//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::HostConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate host configuration text.
pub fn parse_config(content: &str) -> Result<HostConfig, ConfigError> {
    let config: HostConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate host configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<HostConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/endpoint-host.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!("endpoint-host-{}.toml", std::process::id()));
        fs::write(&path, "[endpoint]\nname = \"Orders\"\n").unwrap();

        let config = load_config(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(config.endpoint.name.as_deref(), Some("Orders"));
    }

    #[test]
    fn test_parse_and_validation_errors() {
        assert!(matches!(parse_config("[bus\n"), Err(ConfigError::Parse(_))));

        let err = parse_config("[logging]\nlevel = \"loud\"\n").unwrap_err();
        assert!(err.to_string().starts_with("Validation failed: logging.level"));

        let err = parse_config("[logging]\nlevel = \"loud\"\n[bus]\nworker_threads = 0\n").unwrap_err();
        assert!(matches!(&err, ConfigError::Validation(errors) if errors.len() == 2));
        assert_eq!(
            err.to_string(),
            "Validation failed: logging.level: unknown level `loud`, \
             bus.worker_threads: must be greater than zero"
        );
    }
}
