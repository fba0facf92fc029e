//! Stubs loaded from a user directory
//!
//! A project can override any stub by placing a file of the same name
//! (`contract.stub`, `implementation.stub`, ...) in its stub directory.
//! Stubs the directory does not provide come from the embedded set; the
//! directory itself must exist.

use crate::generation::{GenerationError, Stub, StubSource};
use crate::infrastructure::stubs::EmbeddedStubs;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Stub source reading overrides from a directory
pub struct DirectoryStubs {
    directory: PathBuf,
    fallback: EmbeddedStubs,
}

impl DirectoryStubs {
    pub fn new(directory: impl Into<PathBuf>) -> Result<Self, GenerationError> {
        let directory = directory.into();
        if !directory.is_dir() {
            return Err(GenerationError::StubDirectoryNotFound(directory));
        }

        Ok(Self {
            directory,
            fallback: EmbeddedStubs::new(),
        })
    }
}

impl StubSource for DirectoryStubs {
    fn load(&self, stub: Stub) -> Result<String, GenerationError> {
        let path = self.directory.join(stub.file_name());
        if !path.is_file() {
            return self.fallback.load(stub);
        }

        debug!(path = %path.display(), "Loading stub override");
        fs::read_to_string(&path).map_err(|source| GenerationError::StubReadFailed {
            name: stub.file_name().to_string(),
            source,
        })
    }
}
