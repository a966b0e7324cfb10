//! Error types for loading and auditing locale files.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that abort an audit run.
#[derive(Debug, Error)]
pub enum AuditError {
    /// A locale file or the locales directory does not exist.
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// A locale file is not valid JSON.
    #[error("Failed to parse JSON file: {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A locale file is valid JSON but its root is not an object.
    #[error("Expected a JSON object at the root of {}", path.display())]
    NotAnObject { path: PathBuf },

    /// Any other read or write failure.
    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AuditError {
    /// Map an I/O error on `path`, turning `NotFound` into [`AuditError::NotFound`].
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            AuditError::NotFound { path }
        } else {
            AuditError::Io { path, source }
        }
    }
}
