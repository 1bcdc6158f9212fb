//! File system operations module
//!
//! Provides whole-file loading into memory with an explicit
//! measure / read-into / owned-load API.

mod loader;

pub use loader::*;
