//! Error types for the scan pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while scanning and reporting
#[derive(Debug, Error)]
pub enum ScanError {
    /// A root directory passed on the command line does not exist
    #[error("Root directory does not exist: {0}")]
    MissingRoot(PathBuf),

    /// A candidate file could not be read
    #[error("Failed to read {file}: {source}")]
    FileLoad {
        file: PathBuf,
        source: std::io::Error,
    },

    /// The torrent parser rejected a file's contents
    #[error("Failed to parse {file}: {reason}")]
    Parse { file: PathBuf, reason: String },

    /// A batch-mode output artifact could not be created
    #[error("Failed to create output file {file}: {source}")]
    OutputCreate {
        file: PathBuf,
        source: std::io::Error,
    },

    /// I/O error occurred (catch-all for other I/O errors)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Result with ScanError
pub type Result<T> = std::result::Result<T, ScanError>;
