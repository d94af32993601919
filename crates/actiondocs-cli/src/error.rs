//! Error types for actiondocs-cli

use std::path::PathBuf;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from actiondocs-metadata
    #[error(transparent)]
    Metadata(#[from] actiondocs_metadata::Error),

    /// Error from actiondocs-render
    #[error(transparent)]
    Render(#[from] actiondocs_render::Error),

    /// Error from actiondocs-splice
    #[error(transparent)]
    Splice(#[from] actiondocs_splice::Error),

    /// Required configuration values absent, reported once for all of them
    #[error("Missing required configuration: {}", .names.join(", "))]
    MissingConfig { names: Vec<&'static str> },

    /// Target document could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Target document could not be written
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }

    pub fn missing_config(names: Vec<&'static str>) -> Self {
        Self::MissingConfig { names }
    }
}
