//! Configuration layer
//!
//! Reads the `repository.toml` file of the target project and exposes its
//! values through [`ConfigResolver`], which fails fast with a descriptive
//! error when a required value is absent or empty.

pub mod errors;
pub mod resolver;
pub mod types;

pub use errors::*;
pub use resolver::*;
pub use types::*;

/// File name looked up in the project root when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "repository.toml";
