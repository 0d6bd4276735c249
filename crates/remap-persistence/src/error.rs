//! Persistence error types.
//!
//! Every failure leaves in-memory state untouched; callers get a structured
//! error with a user-facing message and an optional hint.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    /// File I/O error.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not the expected JSON shape.
    #[error("Malformed file: {path}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Document was written by a newer version of the tool.
    #[error("Workspace version {found} is not supported (maximum: {max_supported})")]
    UnsupportedVersion {
        found: u32,
        max_supported: u32,
        path: PathBuf,
    },

    #[error("Failed to serialize data")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    /// Temp file could not be moved over the target.
    #[error("Failed to complete save operation")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PersistenceError {
    pub(crate) fn io(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => {
                format!("Could not {} {}", operation, path.display())
            }
            Self::Malformed { path, source } => {
                format!(
                    "The file at {} is not a valid material mapping: {}",
                    path.display(),
                    source
                )
            }
            Self::UnsupportedVersion {
                found,
                max_supported,
                ..
            } => {
                format!(
                    "This workspace was created with a newer version \
                    (file version {found}, this version supports up to {max_supported})."
                )
            }
            Self::Serialization { .. } => "An error occurred while encoding the data.".to_string(),
            Self::AtomicWriteFailed { target_path, .. } => {
                format!(
                    "Could not save the file to {}. Please check disk space and permissions.",
                    target_path.display()
                )
            }
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Io { operation, .. } => {
                if *operation == "read" {
                    Some("Check that the file exists and you have permission to read it.".into())
                } else {
                    Some("Check that you have permission to write to this location.".into())
                }
            }
            Self::Malformed { .. } => Some(
                "Expected a JSON array of objects with 'old_material' and 'new_material' fields."
                    .into(),
            ),
            Self::UnsupportedVersion { .. } => Some("Update to the latest version.".into()),
            Self::Serialization { .. } => None,
            Self::AtomicWriteFailed { .. } => {
                Some("Free up disk space or try saving to a different location.".into())
            }
        }
    }
}

/// Result type alias for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;
