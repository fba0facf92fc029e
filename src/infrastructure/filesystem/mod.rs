//! Filesystem implementations

pub mod local_filesystem;

pub use local_filesystem::*;
