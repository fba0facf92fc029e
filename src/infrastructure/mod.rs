//! Infrastructure layer - concrete implementations of domain ports

pub mod console;
pub mod filesystem;
pub mod stubs;

pub use self::console::*;
pub use filesystem::*;
pub use stubs::*;
