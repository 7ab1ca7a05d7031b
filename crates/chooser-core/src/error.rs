//! Error types for `chooser-core`.
//!
//! All fallible operations in the core library return [`CoreResult<T>`],
//! which is an alias for `Result<T, CoreError>`. Confirmation rejections that
//! the caller renders as a dialog (wrong type, nothing selected) are *not*
//! errors; they are [`crate::confirm::ConfirmOutcome`] values.

use std::path::PathBuf;

/// Unified error type for all core operations.
///
/// Each variant captures just enough context for the caller to display
/// a meaningful message. Every operation that returns an error leaves the
/// chooser state exactly as it was before the call.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A navigation target is missing or is not a directory.
    #[error("invalid directory: {0}")]
    InvalidDirectory(PathBuf),

    /// Back/forward was requested with an empty history stack.
    #[error("no history in that direction")]
    NoHistory,

    /// A file name typed for saving is empty or contains illegal characters.
    #[error("invalid file name: {0:?}")]
    InvalidFilename(String),

    /// Reading or writing persisted favorites failed.
    #[error("favorites persistence failure: {0}")]
    Persistence(String),

    /// The target path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The process lacks permission to access the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Failed to parse a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout `chooser-core`.
pub type CoreResult<T> = Result<T, CoreError>;
