//! Configuration error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while locating, reading or validating the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Home directory could not be resolved
    #[error("failed to resolve home directory")]
    NoHomeDirectory,

    /// Config file missing at the expected path
    #[error("configuration file not found at {path}")]
    NotFound { path: PathBuf },

    /// Malformed TOML
    #[error("invalid TOML syntax: {0}")]
    InvalidToml(#[from] toml::de::Error),

    /// Serialization failed while writing defaults
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A field parsed but holds an unusable value
    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, value: impl ToString) -> Self {
        ConfigError::InvalidValue {
            field,
            value: value.to_string(),
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
