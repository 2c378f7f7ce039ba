//! Error types for mediagrab-dl.

use pyo3::prelude::*;
use std::path::PathBuf;
use thiserror::Error;

/// Download error variants.
///
/// Every variant displays as a plain message, suitable for reporting as-is.
#[derive(Debug, Error)]
pub enum Error {
    /// Output directory could not be created
    #[error("failed to create output directory {path:?}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Exception raised on the Python side (yt-dlp, FFmpeg postprocessing, conversion)
    #[error("{message}")]
    Python { kind: String, message: String },
}

impl Error {
    /// Capture a Python exception as its type name and `str()` value.
    ///
    /// Falls back to the type name when the exception carries no message.
    pub fn from_py(py: Python<'_>, err: PyErr) -> Self {
        let kind = err
            .get_type(py)
            .name()
            .map(|name| name.to_string())
            .unwrap_or_else(|_| "Exception".to_string());

        let message = err
            .value(py)
            .str()
            .map(|s| s.to_string())
            .unwrap_or_default();

        let message = if message.is_empty() {
            kind.clone()
        } else {
            message
        };

        Self::Python { kind, message }
    }
}

/// Result type alias for mediagrab-dl operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use pyo3::exceptions::{PyRuntimeError, PyValueError};

    #[test]
    fn python_error_uses_exception_str() {
        Python::attach(|py| {
            let err = Error::from_py(py, PyValueError::new_err("not a valid URL"));

            assert!(matches!(
                &err,
                Error::Python { kind, message }
                if kind == "ValueError" && message == "not a valid URL"
            ));
            assert_eq!(err.to_string(), "not a valid URL");
        });
    }

    #[test]
    fn python_error_without_message_falls_back_to_kind() {
        Python::attach(|py| {
            let err = Error::from_py(py, PyRuntimeError::new_err(""));
            assert_eq!(err.to_string(), "RuntimeError");
        });
    }

    #[test]
    fn output_dir_error_mentions_path() {
        let err = Error::OutputDir {
            path: PathBuf::from("/readonly/downloads"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };

        let message = err.to_string();
        assert!(message.starts_with("failed to create output directory"));
        assert!(message.contains("/readonly/downloads"));
    }
}
