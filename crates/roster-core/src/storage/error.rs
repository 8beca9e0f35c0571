//! Storage error handling
//!
//! Typed errors for reading and writing the backing file, with
//! descriptive messages and recovery suggestions.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    /// Permission denied accessing path
    #[error("Permission denied: cannot access '{path}'. Check file permissions.")]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Disk is full or quota exceeded
    #[error(
        "Disk full or quota exceeded while writing to '{path}'. Free up disk space and try again."
    )]
    DiskFull {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to read file
    #[error("Failed to read '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to write file
    #[error("Failed to write '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A row could not be parsed into a student
    #[error("Invalid record file '{path}': {details}")]
    InvalidFormat { path: PathBuf, details: String },

    /// File not found (when expected to exist)
    #[error("File not found: '{path}'")]
    NotFound { path: PathBuf },

    /// Atomic write failed during rename
    #[error("Atomic write failed: could not rename '{from}' to '{to}': {source}")]
    AtomicWriteFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Generic I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl StorageError {
    /// Create an error from a failed write, classified by its kind
    pub fn from_io(error: io::Error, path: PathBuf) -> Self {
        match classify(error, path) {
            Ok(err) => err,
            Err((source, path)) => StorageError::WriteError { path, source },
        }
    }

    /// Create an error from a failed read, classified by its kind
    pub fn from_read_io(error: io::Error, path: PathBuf) -> Self {
        match classify(error, path) {
            Ok(err) => err,
            Err((source, path)) => StorageError::ReadError { path, source },
        }
    }

    /// What the user can do about this error, if anything
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            StorageError::DiskFull { .. } => Some("Free up disk space and try again."),
            StorageError::PermissionDenied { .. } => {
                Some("Check file and directory permissions, or point --data-file somewhere writable.")
            }
            StorageError::InvalidFormat { .. } => {
                Some("Fix the offending row by hand; the header must be 'ID,Name,Roll Number,Email,Grade'.")
            }
            _ => None,
        }
    }
}

/// Map kinds shared by reads and writes; hands back anything else
fn classify(error: io::Error, path: PathBuf) -> Result<StorageError, (io::Error, PathBuf)> {
    match error.kind() {
        io::ErrorKind::PermissionDenied => Ok(StorageError::PermissionDenied {
            path,
            source: error,
        }),
        io::ErrorKind::NotFound => Ok(StorageError::NotFound { path }),
        _ if is_disk_full_error(&error) => Ok(StorageError::DiskFull {
            path,
            source: error,
        }),
        _ => Err((error, path)),
    }
}

/// Check if an I/O error indicates disk full condition
fn is_disk_full_error(error: &io::Error) -> bool {
    let msg = error.to_string().to_lowercase();
    msg.contains("no space left")
        || msg.contains("disk full")
        || msg.contains("quota exceeded")
        || msg.contains("not enough space")
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
