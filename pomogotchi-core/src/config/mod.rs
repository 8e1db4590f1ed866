//! Configuration types
//!
//! Timer configuration is fixed at compile time; there is no runtime loading
//! and nothing is persisted.

pub mod types;

pub use types::*;
