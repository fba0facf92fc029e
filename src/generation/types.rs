//! Core types for the generation domain

use crate::config::ConfigCategory;
use std::fmt;
use std::path::PathBuf;

/// Extension of every generated source file
pub const SOURCE_EXTENSION: &str = "php";

/// Kinds of class the creators generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Contract,
    Implementation,
}

impl ArtifactKind {
    /// Appended to the model name to form the class name
    pub fn class_name_suffix(&self) -> &'static str {
        match self {
            ArtifactKind::Contract => "RepositoryInterface",
            ArtifactKind::Implementation => "Repository",
        }
    }

    /// Configuration category holding the path and namespace of this kind
    pub fn config_category(&self) -> ConfigCategory {
        match self {
            ArtifactKind::Contract => ConfigCategory::Contracts,
            ArtifactKind::Implementation => ConfigCategory::Implementations,
        }
    }

    pub fn stub(&self) -> Stub {
        match self {
            ArtifactKind::Contract => Stub::Contract,
            ArtifactKind::Implementation => Stub::Implementation,
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::Contract => write!(f, "contract"),
            ArtifactKind::Implementation => write!(f, "implementation"),
        }
    }
}

/// Template resources shipped with the tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stub {
    Contract,
    Implementation,
    Provider,
    Model,
}

impl Stub {
    /// File name of the stub inside a stub directory
    pub fn file_name(&self) -> &'static str {
        match self {
            Stub::Contract => "contract.stub",
            Stub::Implementation => "implementation.stub",
            Stub::Provider => "provider.stub",
            Stub::Model => "model.stub",
        }
    }

    pub fn all() -> [Stub; 4] {
        [Stub::Contract, Stub::Implementation, Stub::Provider, Stub::Model]
    }
}

/// Outcome of a create attempt that did not fail.
///
/// `AlreadyExists` means nothing was written; the caller decides whether to
/// call `complete()` and overwrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Creation<T> {
    Created(T),
    AlreadyExists(PathBuf),
}

impl<T> Creation<T> {
    pub fn is_created(&self) -> bool {
        matches!(self, Creation::Created(_))
    }
}

/// Identity of a generated contract, needed to generate its implementation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractIdentity {
    /// Namespace plus class name, e.g. `App\Repositories\Contracts\PostRepositoryInterface`
    pub fully_qualified_name: String,
    pub class_name: String,
}
