//! Application layer - the commands a developer runs, as testable use cases

pub mod bind_repository;
pub mod dto;
pub mod errors;
pub mod make_repository;
pub mod traits;

pub use bind_repository::*;
pub use dto::*;
pub use errors::*;
pub use make_repository::*;
pub use traits::*;

#[cfg(test)]
pub(crate) mod mocks;
