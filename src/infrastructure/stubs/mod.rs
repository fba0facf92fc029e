//! Stub sources: the set compiled into the binary and user overrides on disk

pub mod directory;
pub mod embedded;

pub use directory::*;
pub use embedded::*;
