use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the psimon application
#[derive(Error, Debug)]
pub enum PsimonError {
    #[error("failed to open pressure source {path}: {source}")]
    OpenSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read pressure source {path}: {source}")]
    ReadSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("premature end of input from {0}")]
    PrematureEof(PathBuf),

    #[error("unparseable pressure line from {path}: {line:?}")]
    UnparseableLine { path: PathBuf, line: String },
}

/// Result type alias for the psimon application
pub type Result<T> = std::result::Result<T, PsimonError>;

impl PsimonError {
    /// Create an open failure for a pressure source path
    pub fn open_source(path: impl Into<PathBuf>, source: io::Error) -> Self {
        PsimonError::OpenSource {
            path: path.into(),
            source,
        }
    }

    /// Create a read failure for a pressure source path
    pub fn read_source(path: impl Into<PathBuf>, source: io::Error) -> Self {
        PsimonError::ReadSource {
            path: path.into(),
            source,
        }
    }

    /// Create an unparseable-line error, keeping the offending line for diagnostics
    pub fn unparseable(path: impl Into<PathBuf>, line: impl Into<String>) -> Self {
        PsimonError::UnparseableLine {
            path: path.into(),
            line: line.into(),
        }
    }
}
