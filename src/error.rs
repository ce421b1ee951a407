//! Error types for function-usages.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a usage scan.
#[derive(Debug, Error)]
pub enum UsageError {
    /// An input path does not name an existing regular file.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The call-site pattern failed to compile.
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The file exists but could not be read as UTF-8 text.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, UsageError>;
