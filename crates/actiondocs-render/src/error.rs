//! Error types for actiondocs-render

/// Result type for rendering operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering metadata to markdown
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Field `{field}` is missing required attribute `{attribute}`")]
    MissingField {
        field: String,
        attribute: &'static str,
    },
}

impl Error {
    pub fn missing_field(field: impl Into<String>, attribute: &'static str) -> Self {
        Self::MissingField {
            field: field.into(),
            attribute,
        }
    }
}
