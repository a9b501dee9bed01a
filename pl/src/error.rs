//! Library error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while operating on the prompt library
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("Prompt '{id}' not found.")]
    NotFound { id: String },

    #[error("Provide template via --template or stdin")]
    MissingTemplate,

    #[error("Failed to access {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON in {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Import file {path} must contain a JSON array of prompts")]
    InvalidImport { path: PathBuf },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl LibraryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = LibraryError::NotFound {
            id: "nope".to_string(),
        };
        assert_eq!(err.to_string(), "Prompt 'nope' not found.");
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = LibraryError::io(
            "/tmp/prompts.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );

        let msg = err.to_string();
        assert!(msg.contains("/tmp/prompts.json"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
