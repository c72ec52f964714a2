//! Error types for the invoice toolkit.

use std::fmt;

/// Result type for invoice-kit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for numbering and render-cache operations.
///
/// All operations return `Result<T>` where `Result` is defined as `std::result::Result<T, Error>`.
/// Filesystem failures are classified by kind so callers can decide per-kind
/// whether to retry directory creation or abort.
#[derive(Debug, Clone)]
pub enum Error {
    /// The rendering collaborator failed to produce document bytes.
    ///
    /// Propagated unmodified from the host's renderer. No cache artifact is
    /// written when rendering fails.
    Render(String),

    /// A path did not exist when it was expected to.
    ///
    /// Mapped from `std::io::ErrorKind::NotFound`.
    NotFound(String),

    /// The process lacks permission for a filesystem operation.
    ///
    /// Mapped from `std::io::ErrorKind::PermissionDenied`. Retrying without a
    /// configuration change will not help.
    PermissionDenied(String),

    /// Any other filesystem failure (disk full, interrupted write, etc).
    Io(String),

    /// The sequence collaborator failed to produce a next number.
    ///
    /// Common causes:
    /// - Counter exhausted
    /// - Backing store for the counter unavailable
    Sequence(String),

    /// The order store failed to fetch or persist a record.
    ///
    /// Common causes:
    /// - Database connection lost
    /// - Record not found where one was required
    Repository(String),

    /// Configuration error during crate initialization.
    ///
    /// Common causes:
    /// - Malformed configuration JSON
    /// - Missing required configuration
    Config(String),

    /// Generic error with custom message.
    ///
    /// Used for errors that don't fit into other variants.
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Render(msg) => write!(f, "Render error: {}", msg),
            Error::NotFound(msg) => write!(f, "Not found: {}", msg),
            Error::PermissionDenied(msg) => write!(f, "Permission denied: {}", msg),
            Error::Io(msg) => write!(f, "I/O error: {}", msg),
            Error::Sequence(msg) => write!(f, "Sequence error: {}", msg),
            Error::Repository(msg) => write!(f, "Repository error: {}", msg),
            Error::Config(msg) => write!(f, "Config error: {}", msg),
            Error::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ============================================================================
// Conversions from other error types
// ============================================================================

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => Error::NotFound(e.to_string()),
            std::io::ErrorKind::PermissionDenied => Error::PermissionDenied(e.to_string()),
            _ => Error::Io(e.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            Error::Io(e.to_string())
        } else {
            Error::Config(e.to_string())
        }
    }
}

impl From<String> for Error {
    fn from(e: String) -> Self {
        Error::Other(e)
    }
}

impl From<&str> for Error {
    fn from(e: &str) -> Self {
        Error::Other(e.to_string())
    }
}
