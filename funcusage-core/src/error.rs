//! Typed error handling for funcusage.
//!
//! The analyzer has exactly one failure class: an unrecoverable I/O error on
//! an input or output path. Malformed lines in the name lists are not errors;
//! they flow through as opaque strings that match nothing downstream.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for funcusage operations.
#[derive(Error, Debug)]
pub enum FuncusageError {
    /// I/O error when reading an input file or writing a report
    #[error("I/O error at {path}: {message}")]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl FuncusageError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Get the path associated with this error.
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } => path,
        }
    }
}

/// Convenience type alias for funcusage results.
pub type FuncusageResult<T> = Result<T, FuncusageError>;

/// Extension trait for converting std::io::Error with path context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    fn with_path(self, path: impl Into<PathBuf>) -> FuncusageResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> FuncusageResult<T> {
        self.map_err(|e| FuncusageError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error() {
        let err = FuncusageError::io(
            PathBuf::from("all_functions_names.txt"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        );
        assert!(matches!(err, FuncusageError::Io { .. }));
        assert_eq!(err.path(), Path::new("all_functions_names.txt"));
        assert!(err.to_string().contains("all_functions_names.txt"));
    }

    #[test]
    fn test_io_result_ext() {
        let result: std::io::Result<()> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        let converted = result.with_path("potential_ui_calls.txt");
        assert!(converted.is_err());
    }
}
