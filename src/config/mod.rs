//! Configuration module for bytekit
//!
//! Provides CLI argument definitions and the runtime enums shared
//! between the library and the binary.

mod settings;

pub use settings::*;
