//! Error types for bytekit
//!
//! All fallible operations in this crate are file-system operations; hashing
//! has no error path. Every variant carries the path it failed on so callers
//! can report something actionable.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for bytekit operations
#[derive(Error, Debug)]
pub enum BytekitError {
    /// I/O error during file operations
    #[error("I/O error at '{}': {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File not found
    #[error("Path not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Permission denied
    #[error("Permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    /// Fewer bytes were read than the file's measured size
    #[error("Short read at '{}': expected {expected} bytes, got {actual}", .path.display())]
    ReadShortfall {
        path: PathBuf,
        expected: u64,
        actual: u64,
    },

    /// File too large
    #[error("File too large: {} ({size} bytes exceeds limit of {limit} bytes)", .path.display())]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        limit: u64,
    },

    /// Destination buffer smaller than the measured load size
    #[error("Buffer too small for '{}': need {needed} bytes, have {capacity}", .path.display())]
    BufferTooSmall {
        path: PathBuf,
        needed: usize,
        capacity: usize,
    },

    /// Report serialization error
    #[error("Report error: {0}")]
    ReportError(String),
}

impl BytekitError {
    /// Create an I/O error with path context
    ///
    /// Maps not-found and permission-denied kinds to their dedicated variants.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            _ => Self::Io { path, source },
        }
    }

    /// Check if this error is a permission issue
    pub fn is_permission_error(&self) -> bool {
        match self {
            Self::PermissionDenied(_) => true,
            Self::Io { source, .. } => source.kind() == std::io::ErrorKind::PermissionDenied,
            _ => false,
        }
    }

    /// Get the path associated with this error, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. }
            | Self::NotFound(path)
            | Self::PermissionDenied(path)
            | Self::ReadShortfall { path, .. }
            | Self::FileTooLarge { path, .. }
            | Self::BufferTooSmall { path, .. } => Some(path),
            Self::ReportError(_) => None,
        }
    }
}

/// Result type alias for bytekit operations
pub type Result<T> = std::result::Result<T, BytekitError>;

impl From<serde_json::Error> for BytekitError {
    fn from(err: serde_json::Error) -> Self {
        BytekitError::ReportError(err.to_string())
    }
}

/// Extension trait for adding path context to std::io::Result
pub trait IoResultExt<T> {
    /// Add path context to an I/O error
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|e| BytekitError::io(path, e))
    }
}
