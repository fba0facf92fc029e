//! Application layer error types

use crate::config::ConfigError;
use crate::core::utils::ucfirst;
use crate::generation::GenerationError;
use thiserror::Error;

/// Application layer errors
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error(transparent)]
    ValidationError(#[from] ValidationError),

    #[error(transparent)]
    ConfigError(#[from] ConfigError),

    #[error(transparent)]
    GenerationError(#[from] GenerationError),

    #[error("Prompt error: {0}")]
    PromptError(String),
}

/// Validation errors for command arguments
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{} argument is missing", ucfirst(.0))]
    MissingArgument(String),
}

impl ApplicationError {
    /// Configuration error behind this error, if any
    pub fn config_error(&self) -> Option<&ConfigError> {
        match self {
            ApplicationError::ConfigError(e) => Some(e),
            ApplicationError::GenerationError(GenerationError::Config(e)) => Some(e),
            _ => None,
        }
    }
}
