//! Shared helpers used across the repokit layers.

pub mod utils;

pub use utils::*;
