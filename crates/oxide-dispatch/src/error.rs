//! Error types for route selection.

use thiserror::Error;

/// Dispatch-specific errors.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No dispatcher or route matched the path.
    #[error("no match for path: {path}")]
    NotFound { path: String },

    /// A template produced an expression the regex engine rejected.
    #[error("invalid template {template}: {source}")]
    MalformedTemplate {
        template: String,
        #[source]
        source: regex::Error,
    },

    /// A service table could not be parsed.
    #[error("invalid service table: {0}")]
    Config(#[from] serde_json::Error),
}

impl DispatchError {
    pub(crate) fn not_found(path: &str) -> Self {
        Self::NotFound {
            path: path.to_string(),
        }
    }
}

/// Result type alias for dispatch operations.
pub type Result<T> = std::result::Result<T, DispatchError>;
