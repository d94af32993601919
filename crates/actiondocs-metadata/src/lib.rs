//! Action metadata loading for actiondocs
//!
//! Reads a declarative action metadata file (action.yml) into a generic
//! YAML tree and exposes typed access to its sections.

pub mod error;
pub mod metadata;

pub use error::{Error, Result};
pub use metadata::ActionMetadata;
