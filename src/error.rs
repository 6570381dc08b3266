//! Error handling types and utilities.

use std::path::PathBuf;

/// A specialized Result type for archdoc-mcp operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()`
/// and `.with_context()` methods throughout the codebase.
pub type Result<T> = anyhow::Result<T>;

/// Error returned by the knowledge engine.
///
/// Index-build failures for individual documents are not represented here:
/// those are logged and skipped during the corpus scan. Everything in this
/// enum crosses the tool boundary as a structured `kind: message` string.
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    /// The corpus root cannot be scanned at all. Fatal at startup.
    #[error("corpus root {root} is not readable: {reason}")]
    CorpusUnreadable { root: PathBuf, reason: String },

    /// The requested document is not in the index or its content is
    /// unreadable. `path` carries the requested identifier; for composer
    /// failures it names the missing expected document instead.
    #[error("document not found: {path}")]
    DocumentNotFound { path: String },

    /// No indexed document belongs to the requested framework.
    #[error("framework not found: {framework}")]
    FrameworkNotFound { framework: String },

    /// Request input failed validation. Raised before any index access.
    #[error("invalid query: field '{field}' {reason}")]
    InvalidQuery { field: String, reason: String },
}

impl KnowledgeError {
    /// Stable error-kind name, used as the prefix of every error string
    /// returned to a tool caller.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CorpusUnreadable { .. } => "CorpusUnreadableError",
            Self::DocumentNotFound { .. } => "DocumentNotFoundError",
            Self::FrameworkNotFound { .. } => "FrameworkNotFoundError",
            Self::InvalidQuery { .. } => "InvalidQueryError",
        }
    }

    /// Render as the structured `kind: message` string the tool surface
    /// returns to callers.
    pub fn to_tool_error(&self) -> String {
        format!("{}: {}", self.kind(), self)
    }

    pub fn document_not_found(path: impl Into<String>) -> Self {
        Self::DocumentNotFound { path: path.into() }
    }

    pub fn invalid_query(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidQuery {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Map any error chain to the tool-surface error string.
///
/// `KnowledgeError` values keep their structured kind prefix; anything else
/// degrades to a plain message rather than an opaque failure.
pub fn to_tool_error(err: &anyhow::Error) -> String {
    match err.downcast_ref::<KnowledgeError>() {
        Some(known) => known.to_tool_error(),
        None => err.to_string(),
    }
}
