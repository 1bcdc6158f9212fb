//! # Bytekit - FNV-1a Hashing and Whole-File Loading
//!
//! Bytekit is a small utility crate providing three independent primitives:
//!
//! - **Hashing**: bit-exact FNV-1a digests in 32-bit and 64-bit widths over
//!   byte buffers, C strings, and whole files, with incremental hashers for
//!   streaming input
//! - **File loading**: whole-file loading into memory with an explicit
//!   measure / read-into / owned-load API, appending a terminating zero byte
//!   after the content
//! - **Timestamps**: the current wall-clock time as nanoseconds since the
//!   Unix epoch
//!
//! FNV-1a is non-cryptographic: it is fast and well distributed for hash
//! tables and change detection, but collisions can be constructed
//! deliberately. Do not use it where an adversary chooses the input.
//!
//! ## Quick Start
//!
//! ```
//! use bytekit::hash::{fnv1a_32, fnv1a_64};
//!
//! assert_eq!(fnv1a_32(b""), 0x811c9dc5);
//! assert_eq!(fnv1a_64(b"foobar"), 0x85944171f73967e8);
//! ```
//!
//! ## Loading Files
//!
//! ```no_run
//! use bytekit::fs::{load, measure, read_into};
//! use std::path::Path;
//!
//! let path = Path::new("config.toml");
//!
//! // Owned form: content plus one terminating zero byte
//! let buf = load(path).unwrap();
//! assert_eq!(buf.last(), Some(&0));
//!
//! // Caller-sized form
//! let needed = measure(path).unwrap();
//! let mut dest = vec![0u8; needed];
//! let written = read_into(path, &mut dest).unwrap();
//! assert_eq!(written, needed);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod fs;
pub mod hash;
pub mod time;

// Re-export commonly used types
pub use config::HashWidth;
pub use error::{BytekitError, Result};
pub use hash::{fnv1a_32, fnv1a_64, HashResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    //! Convenient re-exports for common usage
    //!
    //! ```
    //! use bytekit::prelude::*;
    //! ```

    pub use crate::config::{HashWidth, OutputFormat};
    pub use crate::error::{BytekitError, Result};
    pub use crate::fs::{load, measure, read_into};
    pub use crate::hash::{
        fnv1a_32, fnv1a_32_cstr, fnv1a_64, fnv1a_64_cstr, hash_bytes, hash_file, Fnv32, Fnv64,
        HashResult,
    };
    pub use crate::time::nanos_now;
}
