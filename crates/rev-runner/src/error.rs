//! Runner error types

use rev_engine::{RemoteError, ReverseError};
use rev_model::DefinitionKind;
use rev_regression::ValidationError;
use std::path::PathBuf;

/// Runner error
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// File could not be read or written
    #[error("io error on {path}: {source}")]
    Io {
        /// Offending path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is malformed
    #[error("invalid config: {0}")]
    Config(String),

    /// Model or report JSON is malformed
    #[error("invalid json in {context}: {message}")]
    Json {
        /// What was being parsed or written
        context: String,
        /// Parser message
        message: String,
    },

    /// Snapshot could not be loaded
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// Traversal failed
    #[error(transparent)]
    Reverse(#[from] ReverseError),

    /// Validation failed structurally
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Explicit handler list names a kind with no built-in handler
    #[error("no built-in handler for {0}")]
    UnknownHandler(DefinitionKind),

    /// Snapshot has no root to reverse from
    #[error("snapshot has no root entity")]
    EmptySnapshot,
}

impl RunnerError {
    /// Create IO error for a path
    #[inline]
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create JSON error
    #[inline]
    #[must_use]
    pub fn json(context: impl Into<String>, error: &serde_json::Error) -> Self {
        Self::Json {
            context: context.into(),
            message: error.to_string(),
        }
    }

    /// Check if error is structural (misconfiguration, not data)
    #[must_use]
    pub fn is_structural(&self) -> bool {
        match self {
            Self::Reverse(e) => e.is_structural(),
            Self::Validation(e) => e.is_structural(),
            Self::UnknownHandler(_) | Self::Config(_) => true,
            _ => false,
        }
    }
}
