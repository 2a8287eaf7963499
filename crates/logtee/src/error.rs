//! Error types for sink configuration and file output

use std::io;
use std::path::PathBuf;

/// Result type for logtee operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while wiring sinks or writing the log file
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Sinks are already attached and no capture writer exists to reuse
    #[error("logger already has sinks attached")]
    AlreadyConfigured,

    /// Failed to create the log file's directory chain
    #[error("failed to create log directory at {path}: {source}")]
    CreateDirectory {
        /// The directory chain that could not be created
        path: PathBuf,
        /// The underlying error
        source: io::Error,
    },

    /// Failed to open the log file for appending
    #[error("failed to open log file at {path}: {source}")]
    OpenSink {
        /// The log file path
        path: PathBuf,
        /// The underlying error
        source: io::Error,
    },

    /// Failed to rotate the log file into its backup chain
    #[error("failed to rotate log file at {path}: {source}")]
    Rotation {
        /// The log file path
        path: PathBuf,
        /// The underlying error
        source: io::Error,
    },

    /// Failed to write to or flush the log file
    #[error("failed to write log file at {path}: {source}")]
    Write {
        /// The log file path
        path: PathBuf,
        /// The underlying error
        source: io::Error,
    },
}
