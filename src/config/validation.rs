//! Semantic configuration checks, run after deserialization.

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::AppConfig;

/// A single failed semantic check.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("invalid bind address '{0}'")]
    BindAddress(String),

    #[error("invalid upstream base URL '{url}': {reason}")]
    BaseUrl { url: String, reason: String },

    #[error("database.port must not be 0")]
    ZeroPort,

    #[error("log_sink.capacity must be at least 1")]
    ZeroCapacity,
}

/// Validate the whole config, collecting every violation.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.database.username.is_empty() {
        errors.push(ValidationError::Empty("database.username"));
    }
    if config.database.host.is_empty() {
        errors.push(ValidationError::Empty("database.host"));
    }
    if config.database.name.is_empty() {
        errors.push(ValidationError::Empty("database.name"));
    }
    if config.database.port == 0 {
        errors.push(ValidationError::ZeroPort);
    }

    if let Err(e) = Url::parse(&config.upstream.base_url) {
        errors.push(ValidationError::BaseUrl {
            url: config.upstream.base_url.clone(),
            reason: e.to_string(),
        });
    }

    if config.log_sink.capacity == 0 {
        errors.push(ValidationError::ZeroCapacity);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_bad_bind_address_is_rejected() {
        let mut config = AppConfig::default();
        config.listener.bind_address = "not-an-address".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::BindAddress(_)));
    }

    #[test]
    fn test_violations_are_collected_not_short_circuited() {
        let mut config = AppConfig::default();
        config.database.host.clear();
        config.database.port = 0;
        config.log_sink.capacity = 0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_bad_base_url_is_rejected() {
        let mut config = AppConfig::default();
        config.upstream.base_url = "notaurl".to_string();
        assert!(validate_config(&config).is_err());
    }
}
