//! Generate repository contracts, implementations and service provider
//! bindings for PHP framework projects.

pub mod application;
pub mod config;
pub mod core;
pub mod generation;
pub mod infrastructure;
