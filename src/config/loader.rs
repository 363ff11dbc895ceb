//! Configuration loading from disk and environment.

use std::env;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading. Fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join(", "))]
    Validation(Vec<ValidationError>),
}

/// Load and validate configuration.
///
/// Without a path the defaults apply; either way the `DB_*` environment
/// variables override whatever the file said.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut config = match path {
        Some(path) => parse_config(&fs::read_to_string(path)?)?,
        None => AppConfig::default(),
    };

    apply_env_overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

fn apply_env_overrides(config: &mut AppConfig) {
    if let Ok(value) = env::var("DB_USERNAME") {
        config.database.username = value;
    }
    if let Ok(value) = env::var("DB_PASSWORD") {
        config.database.password = value;
    }
    if let Ok(value) = env::var("DB_HOST") {
        config.database.host = value;
    }
    if let Ok(value) = env::var("DB_PORT") {
        match value.parse() {
            Ok(port) => config.database.port = port,
            Err(_) => tracing::warn!(value = %value, "Ignoring unparsable DB_PORT"),
        }
    }
    if let Ok(value) = env::var("DB_NAME") {
        config.database.name = value;
    }
}
