//! dkg Configuration Management
//!
//! Handles configuration from environment variables and config files
//! with sensible defaults for development.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Annotation service configuration
    pub annotator: AnnotatorConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("DKG_ANNOTATOR_URL") {
            config.annotator.url = url;
        }
        if let Ok(model) = std::env::var("DKG_ANNOTATOR_MODEL") {
            config.annotator.model = model;
        }
        if let Ok(timeout) = std::env::var("DKG_ANNOTATOR_TIMEOUT_SECS") {
            config.annotator.timeout_secs =
                timeout.parse().map_err(|_| ConfigError::InvalidValue {
                    key: "DKG_ANNOTATOR_TIMEOUT_SECS".to_string(),
                    value: timeout,
                })?;
        }

        if let Ok(level) = std::env::var("LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(config)
    }

    /// Load from a TOML file
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::FileReadError {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path,
            message: e.to_string(),
        })
    }
}

/// Annotation service configuration
///
/// The linguistic annotator is an external capability reached over HTTP. It
/// is acquired once at process start and injected into the pipeline as a
/// shared read-only dependency, not re-created per call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotatorConfig {
    /// Base URL of the annotation service
    pub url: String,

    /// Language model name the service should load
    pub model: String,

    /// Request timeout in seconds (transport concern; the pipeline itself
    /// imposes no timeout)
    pub timeout_secs: u64,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8090".to_string(),
            model: "en_core_web_sm".to_string(),
            timeout_secs: 60,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.annotator.url, "http://localhost:8090");
        assert_eq!(config.annotator.model, "en_core_web_sm");
        assert_eq!(config.annotator.timeout_secs, 60);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_roundtrip_toml() {
        let config = AppConfig::default();
        let serialized = toml::to_string(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.annotator.url, config.annotator.url);
        assert_eq!(parsed.annotator.model, config.annotator.model);
    }
}
