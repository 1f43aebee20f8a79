//! XMCDA adapter error types.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::foundation::ModelError;

/// Errors raised while reading or writing XMCDA documents.
#[derive(Debug, Error)]
pub enum XmcdaError {
    #[error("Unable to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid format in {}: {message}", .path.display())]
    Format { path: PathBuf, message: String },

    #[error("Malformed value: {reason}")]
    MalformedValue { reason: String },

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("Unable to serialize {}: {reason}", .path.display())]
    Serialization { path: PathBuf, reason: String },
}

impl XmcdaError {
    /// Creates an I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        XmcdaError::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a format error for the given path.
    pub fn format(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        XmcdaError::Format {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a malformed value error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        XmcdaError::MalformedValue {
            reason: reason.into(),
        }
    }

    /// Creates a serialization error for the given path.
    pub fn serialization(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        XmcdaError::Serialization {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Appends location context to a malformed value error; other variants pass through.
    pub fn with_context(self, context: impl AsRef<str>) -> Self {
        match self {
            XmcdaError::MalformedValue { reason } => XmcdaError::MalformedValue {
                reason: format!("{} ({})", reason, context.as_ref()),
            },
            other => other,
        }
    }
}
