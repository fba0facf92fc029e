//! Error types for the generation domain

use crate::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating or registering files
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Invalid model reference: {0:?}")]
    InvalidReference(String),

    #[error("Stub not found: {0}")]
    StubNotFound(String),

    #[error("Stub directory not found: {0}")]
    StubDirectoryNotFound(PathBuf),

    #[error("Failed to read stub {name}: {source}")]
    StubReadFailed {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory {path}: {source}")]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file {path}: {source}")]
    FileWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file {path}: {source}")]
    FileReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No bindings array opening found in {0}")]
    ArrayMarkerNotFound(PathBuf),

    #[error("Nothing to complete for {0}: the file was not blocked by an existing one")]
    NothingToComplete(PathBuf),

    #[error("Replacements were not initialized for {0}")]
    ReplacementsNotInitialized(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
