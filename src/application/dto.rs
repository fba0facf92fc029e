//! Data Transfer Objects for application layer

use crate::application::ValidationError;
use std::path::PathBuf;

/// Request to generate a model's repository
#[derive(Debug, Clone)]
pub struct MakeRepositoryRequest {
    pub model: String,
    /// Register the new pair in the service provider afterwards
    pub bind: bool,
}

impl MakeRepositoryRequest {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            bind: true,
        }
    }

    pub fn without_binding(mut self) -> Self {
        self.bind = false;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_model_argument(&self.model)
    }
}

/// Request to bind a model's repository in the service provider
#[derive(Debug, Clone)]
pub struct BindRepositoryRequest {
    pub model: String,
}

impl BindRepositoryRequest {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_model_argument(&self.model)
    }
}

fn validate_model_argument(model: &str) -> Result<(), ValidationError> {
    if model.trim().is_empty() {
        return Err(ValidationError::MissingArgument("model".to_string()));
    }
    Ok(())
}

/// Step at which the developer declined to continue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclinedStep {
    /// The model did not exist and was not created
    Model,
    /// The contract existed and was not overwritten
    Contract,
    /// The implementation existed and was not overwritten
    Implementation,
}

/// Response from repository generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MakeRepositoryResponse {
    pub model_created: bool,
    /// Files written, in order
    pub written: Vec<PathBuf>,
    pub declined: Option<DeclinedStep>,
    pub binding: Option<BindRepositoryResponse>,
}

impl MakeRepositoryResponse {
    pub fn is_complete(&self) -> bool {
        self.declined.is_none()
    }
}

/// Outcome of a bind attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingStatus {
    Bound,
    AlreadyBound,
}

/// Response from binding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindRepositoryResponse {
    pub status: BindingStatus,
    pub provider_path: PathBuf,
    pub provider_created: bool,
    pub interface: String,
    pub implementation: String,
}
