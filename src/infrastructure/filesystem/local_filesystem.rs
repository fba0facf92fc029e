//! Filesystem port backed by `std::fs`

use std::fs;
use std::io;
use std::path::Path;

use crate::generation::Filesystem;

/// Mode applied to directories created for generated files (Unix only)
pub const DEFAULT_DIRECTORY_MODE: u32 = 0o755;

/// Filesystem of the machine the tool runs on
pub struct LocalFilesystem {
    #[cfg_attr(not(unix), allow(dead_code))]
    directory_mode: u32,
}

impl LocalFilesystem {
    pub fn new() -> Self {
        Self::with_mode(DEFAULT_DIRECTORY_MODE)
    }

    pub fn with_mode(directory_mode: u32) -> Self {
        Self { directory_mode }
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(self.directory_mode);
        }

        builder.create(path)
    }
}
