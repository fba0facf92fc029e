//! Port interfaces for the generation domain

use crate::generation::{Creation, GenerationError, GenerationTarget, Stub};
use std::io;
use std::path::Path;

/// Filesystem access used by creators and the provider registrar
pub trait Filesystem: Send + Sync {
    fn exists(&self, path: &Path) -> bool;

    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write `contents` to `path`, replacing any existing file
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;

    /// Create `path` and every missing parent
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}

/// Source of stub (template) text
pub trait StubSource: Send + Sync {
    /// Load the text of a stub, failing with `StubNotFound` when absent
    fn load(&self, stub: Stub) -> Result<String, GenerationError>;
}

/// A creator writes one generated class file.
///
/// `create` never overwrites: an existing file yields
/// [`Creation::AlreadyExists`], after which `complete` forces the write.
pub trait ArtifactCreator {
    type Output;

    fn target(&self) -> &GenerationTarget;

    fn create(&mut self) -> Result<Creation<Self::Output>, GenerationError>;

    fn complete(&mut self) -> Result<Self::Output, GenerationError>;
}
