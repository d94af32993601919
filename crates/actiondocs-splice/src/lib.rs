//! Marker-delimited document splicing for actiondocs
//!
//! Locates a literal start/end marker pair in a document and replaces
//! the span between them with freshly rendered content, leaving the
//! markers themselves intact.

pub mod error;
pub mod splice;

pub use error::{Error, Result};
pub use splice::{DEFAULT_MARKER_END, DEFAULT_MARKER_START, MarkerPair, Splicer};
