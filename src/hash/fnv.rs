//! FNV-1a hashing in 32-bit and 64-bit widths
//!
//! FNV-1a is a non-cryptographic hash defined over a byte stream: the
//! accumulator starts at a per-width offset basis and folds each byte in
//! with XOR followed by a wrapping multiply by a per-width prime. The
//! wraparound is part of the algorithm; digests are identical on every
//! platform regardless of host endianness.

use crate::config::HashWidth;
use crate::error::{IoResultExt, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::ffi::CStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// 32-bit FNV offset basis
pub const FNV32_OFFSET_BASIS: u32 = 0x811c_9dc5;
/// 32-bit FNV prime
pub const FNV32_PRIME: u32 = 0x0100_0193;
/// 64-bit FNV offset basis
pub const FNV64_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
/// 64-bit FNV prime
pub const FNV64_PRIME: u64 = 0x0100_0000_01b3;

/// Compute the 32-bit FNV-1a digest of a byte slice.
///
/// An empty slice yields the offset basis.
#[inline]
pub fn fnv1a_32(bytes: &[u8]) -> u32 {
    let mut hash = FNV32_OFFSET_BASIS;
    for &byte in bytes {
        hash ^= byte as u32;
        hash = hash.wrapping_mul(FNV32_PRIME);
    }
    hash
}

/// Compute the 32-bit FNV-1a digest of a C string.
///
/// Hashes the bytes before the terminating NUL; the NUL itself is
/// never included.
#[inline]
pub fn fnv1a_32_cstr(s: &CStr) -> u32 {
    fnv1a_32(s.to_bytes())
}

/// Compute the 64-bit FNV-1a digest of a byte slice.
///
/// An empty slice yields the offset basis.
#[inline]
pub fn fnv1a_64(bytes: &[u8]) -> u64 {
    let mut hash = FNV64_OFFSET_BASIS;
    for &byte in bytes {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(FNV64_PRIME);
    }
    hash
}

/// Compute the 64-bit FNV-1a digest of a C string.
#[inline]
pub fn fnv1a_64_cstr(s: &CStr) -> u64 {
    fnv1a_64(s.to_bytes())
}

/// Incremental 32-bit FNV-1a hasher
///
/// Feeding input in any chunking produces the same digest as hashing
/// the concatenation in one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fnv32 {
    state: u32,
}

impl Fnv32 {
    /// Create a hasher seeded with the offset basis
    pub fn new() -> Self {
        Self {
            state: FNV32_OFFSET_BASIS,
        }
    }

    /// Fold more bytes into the digest
    pub fn update(&mut self, data: &[u8]) {
        for &byte in data {
            self.state ^= byte as u32;
            self.state = self.state.wrapping_mul(FNV32_PRIME);
        }
    }

    /// Current digest value
    pub fn digest(&self) -> u32 {
        self.state
    }
}

impl Default for Fnv32 {
    fn default() -> Self {
        Self::new()
    }
}

/// Incremental 64-bit FNV-1a hasher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fnv64 {
    state: u64,
}

impl Fnv64 {
    /// Create a hasher seeded with the offset basis
    pub fn new() -> Self {
        Self {
            state: FNV64_OFFSET_BASIS,
        }
    }

    /// Fold more bytes into the digest
    pub fn update(&mut self, data: &[u8]) {
        for &byte in data {
            self.state ^= byte as u64;
            self.state = self.state.wrapping_mul(FNV64_PRIME);
        }
    }

    /// Current digest value
    pub fn digest(&self) -> u64 {
        self.state
    }
}

impl Default for Fnv64 {
    fn default() -> Self {
        Self::new()
    }
}

impl std::hash::Hasher for Fnv64 {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        self.update(bytes);
    }
}

/// Hash result as hex string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashResult {
    /// The digest width used
    pub width: HashWidth,
    /// Digest value as lowercase hex string
    pub hash: String,
    /// Input size in bytes
    pub size: u64,
}

impl HashResult {
    /// Create a new hash result
    pub fn new(width: HashWidth, hash: String, size: u64) -> Self {
        Self { width, hash, size }
    }

    /// Verify against another hash result
    pub fn verify(&self, other: &HashResult) -> bool {
        self.width == other.width && self.hash == other.hash
    }
}

impl std::fmt::Display for HashResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hash)
    }
}

/// Unified hasher over both digest widths
pub enum Hasher {
    /// 32-bit FNV-1a
    Fnv32(Fnv32),
    /// 64-bit FNV-1a
    Fnv64(Fnv64),
}

impl Hasher {
    /// Create a new hasher for the given width
    pub fn new(width: HashWidth) -> Self {
        match width {
            HashWidth::Fnv32 => Self::Fnv32(Fnv32::new()),
            HashWidth::Fnv64 => Self::Fnv64(Fnv64::new()),
        }
    }

    /// Get the width this hasher uses
    pub fn width(&self) -> HashWidth {
        match self {
            Self::Fnv32(_) => HashWidth::Fnv32,
            Self::Fnv64(_) => HashWidth::Fnv64,
        }
    }

    /// Update the hasher with more data
    pub fn update(&mut self, data: &[u8]) {
        match self {
            Self::Fnv32(h) => h.update(data),
            Self::Fnv64(h) => h.update(data),
        }
    }

    /// Finalize and get the digest as hex string
    pub fn finalize(self) -> String {
        match self {
            Self::Fnv32(h) => format!("{:08x}", h.digest()),
            Self::Fnv64(h) => format!("{:016x}", h.digest()),
        }
    }
}

/// Compute hash of data in memory
pub fn hash_bytes(data: &[u8], width: HashWidth) -> HashResult {
    let mut hasher = Hasher::new(width);
    hasher.update(data);
    HashResult::new(width, hasher.finalize(), data.len() as u64)
}

/// Compute hash of a file
pub fn hash_file(path: &Path, width: HashWidth) -> Result<HashResult> {
    hash_file_with_buffer(path, width, 64 * 1024)
}

/// Compute hash of a file with custom buffer size
pub fn hash_file_with_buffer(
    path: &Path,
    width: HashWidth,
    buffer_size: usize,
) -> Result<HashResult> {
    let file = File::open(path).with_path(path)?;
    let size = file.metadata().with_path(path)?.len();
    let mut reader = BufReader::with_capacity(buffer_size, file);
    let mut hasher = Hasher::new(width);
    let mut buffer = vec![0u8; buffer_size];

    loop {
        let bytes_read = reader.read(&mut buffer).with_path(path)?;

        if bytes_read == 0 {
            break;
        }

        hasher.update(&buffer[..bytes_read]);
    }

    Ok(HashResult::new(width, hasher.finalize(), size))
}

/// Batch hash multiple files in parallel
pub fn hash_files_parallel(paths: &[&Path], width: HashWidth) -> Vec<Result<HashResult>> {
    paths
        .par_iter()
        .map(|path| hash_file(path, width))
        .collect()
}

/// Benchmark both digest widths over in-memory data
pub fn benchmark_widths(data_size: usize) -> Vec<(HashWidth, std::time::Duration, f64)> {
    let data: Vec<u8> = (0..data_size).map(|i| (i % 256) as u8).collect();
    let mut results = Vec::new();

    for width in [HashWidth::Fnv32, HashWidth::Fnv64] {
        let start = std::time::Instant::now();
        let iterations = 10;

        for _ in 0..iterations {
            hash_bytes(&data, width);
        }

        let duration = start.elapsed() / iterations;
        let throughput = (data_size as f64) / duration.as_secs_f64() / (1024.0 * 1024.0);

        results.push((width, duration, throughput));
    }

    results.sort_by(|a, b| a.1.cmp(&b.1));
    results
}
