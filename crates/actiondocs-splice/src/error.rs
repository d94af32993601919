//! Error types for actiondocs-splice

/// Result type for splicing operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while splicing a document
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to compile marker pattern: {0}")]
    Pattern(#[from] regex::Error),
}
