//! Error types for zipmr

use std::path::PathBuf;

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while importing archives
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration is missing or malformed
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Archive could not be read or decoded
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// A git operation failed
    #[error("git {operation} failed: {detail}")]
    Git {
        /// The git subcommand that failed (e.g. "clone", "push")
        operation: String,
        /// Captured stderr or launch error
        detail: String,
    },

    /// HTTP transport failure talking to the hosting platform
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The hosting platform rejected a request
    #[error("platform API error: {0}")]
    Platform(String),

    /// The intake directory could not be listed
    #[error("intake directory {} is not readable: {detail}", .path.display())]
    IntakeUnreadable {
        /// The intake directory path
        path: PathBuf,
        /// Underlying I/O failure
        detail: String,
    },
}
