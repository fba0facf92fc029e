//! Error types for the configuration layer

use crate::config::ConfigKey;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or resolving configuration values
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} is missing in configuration file.")]
    MissingConfigurationValue(ConfigKey),

    #[error("{0} is not valid in configuration file.")]
    InvalidConfigurationValue(ConfigKey),

    #[error("Failed to read configuration file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),
}

impl ConfigError {
    /// The key this error refers to, if any
    pub fn key(&self) -> Option<ConfigKey> {
        match self {
            ConfigError::MissingConfigurationValue(key)
            | ConfigError::InvalidConfigurationValue(key) => Some(*key),
            _ => None,
        }
    }
}
