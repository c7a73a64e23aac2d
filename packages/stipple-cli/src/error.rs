use std::path::PathBuf;

use stipple::StippleError;
use thiserror::Error;

/// Errors raised while planning or writing commits
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid run configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from the rendering core
    #[error(transparent)]
    Core(#[from] StippleError),

    /// Target path has no `.git` directory
    #[error("'{}' is not a git repository (no .git folder found)", .0.display())]
    NotARepository(PathBuf),

    /// A git invocation exited unsuccessfully
    #[error("git {command} failed: {stderr}")]
    Git { command: String, stderr: String },

    /// I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;
