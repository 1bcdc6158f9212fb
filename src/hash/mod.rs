//! FNV-1a hash computation module
//!
//! Provides 32-bit and 64-bit FNV-1a digests over byte buffers,
//! C strings, and whole files, with incremental hashers for
//! streaming input.

mod fnv;

pub use fnv::*;
