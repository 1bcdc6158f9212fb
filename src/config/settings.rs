//! CLI arguments and runtime settings

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Command-line arguments for the bytekit binary
#[derive(Parser, Debug)]
#[command(
    name = "bytekit",
    version,
    about = "Fast FNV-1a hashing and whole-file loading utilities"
)]
pub struct CliArgs {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute FNV-1a digests of one or more files
    Hash {
        /// Files to hash
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Digest width in bits
        #[arg(short, long, value_enum, default_value = "64")]
        width: HashWidth,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the buffer size needed to load a file (content plus NUL terminator)
    Measure {
        /// File to measure
        path: PathBuf,
    },

    /// Load a file into memory and report its size and digests
    Load {
        /// File to load
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Benchmark hash widths over in-memory data
    Bench {
        /// Test data size in bytes
        #[arg(short, long, default_value_t = 64 * 1024 * 1024)]
        size: usize,
    },
}

/// FNV-1a digest width
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HashWidth {
    /// FNV-1a 64-bit
    #[default]
    #[value(name = "64")]
    Fnv64,
    /// FNV-1a 32-bit
    #[value(name = "32")]
    Fnv32,
}

impl HashWidth {
    /// Get the digest size in bytes
    pub fn output_size(&self) -> usize {
        match self {
            Self::Fnv64 => 8,
            Self::Fnv32 => 4,
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fnv64 => "FNV-1a/64",
            Self::Fnv32 => "FNV-1a/32",
        }
    }
}

/// Output format for reports
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON format
    Json,
}
