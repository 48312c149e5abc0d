//! Error types for zipbundler
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for zipbundler operations
pub type BundlerResult<T> = Result<T, BundlerError>;

/// Coarse classification used by the CLI boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    Config,
    Internal,
}

/// Main error type for zipbundler operations
#[derive(Error, Debug)]
pub enum BundlerError {
    /// Caller supplied something unusable (raised before any side effect)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A required file or directory does not exist
    #[error("{what} not found: {path}")]
    NotFound { what: &'static str, path: PathBuf },

    /// Configuration could not be parsed or failed validation
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Glob pattern could not be compiled
    #[error("invalid pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },

    /// Zip container could not be read or written
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BundlerError {
    pub fn invalid(message: impl Into<String>) -> Self {
        BundlerError::InvalidArgument(message.into())
    }

    pub fn not_found(what: &'static str, path: impl Into<PathBuf>) -> Self {
        BundlerError::NotFound {
            what,
            path: path.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            BundlerError::InvalidArgument(_) | BundlerError::Pattern { .. } => {
                ErrorKind::InvalidArgument
            }
            BundlerError::NotFound { .. } => ErrorKind::NotFound,
            BundlerError::Config { .. } => ErrorKind::Config,
            BundlerError::Io(err) if err.kind() == std::io::ErrorKind::NotFound => {
                ErrorKind::NotFound
            }
            BundlerError::Archive(_) | BundlerError::Io(_) => ErrorKind::Internal,
        }
    }
}

impl From<FsError> for BundlerError {
    fn from(err: FsError) -> Self {
        match err {
            FsError::NotFound(path) => BundlerError::not_found("file", path),
            FsError::Io(err) => BundlerError::Io(err),
            other => BundlerError::Io(std::io::Error::other(other.to_string())),
        }
    }
}
