//! Marker-delimited document splicing

use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default opening marker, matching existing READMEs in the wild
pub const DEFAULT_MARKER_START: &str = "<!--doc_begin-->";
/// Default closing marker
pub const DEFAULT_MARKER_END: &str = "<!--doc_end-->";

/// A literal start/end marker pair delimiting the managed span
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerPair {
    pub start: String,
    pub end: String,
}

impl MarkerPair {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

impl Default for MarkerPair {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER_START, DEFAULT_MARKER_END)
    }
}

/// Replaces the span between a marker pair with freshly rendered content
#[derive(Debug, Clone)]
pub struct Splicer {
    markers: MarkerPair,
}

impl Splicer {
    pub fn new(markers: MarkerPair) -> Self {
        Self { markers }
    }

    pub fn markers(&self) -> &MarkerPair {
        &self.markers
    }

    /// Whether the document contains a matching marker pair
    pub fn has_span(&self, document: &str) -> Result<bool> {
        Ok(self.marker_regex()?.is_match(document))
    }

    /// Replace the first span between the markers with `content`.
    ///
    /// Markers are matched as literals and survive byte-identical; the
    /// content is wrapped in newlines so the markers keep their own
    /// lines. The interior matches lazily across newlines, so a second
    /// marker pair later in the document is never swallowed. A document
    /// without a matching pair is returned unchanged.
    pub fn splice(&self, document: &str, content: &str) -> Result<String> {
        let marker_regex = self.marker_regex()?;

        if !marker_regex.is_match(document) {
            tracing::debug!("No marker pair found; document left unchanged");
            return Ok(document.to_string());
        }

        // NoExpand: rendered content may legitimately contain `$`
        let replacement = format!("{}\n{}\n{}", self.markers.start, content, self.markers.end);
        Ok(marker_regex
            .replace(document, NoExpand(&replacement))
            .into_owned())
    }

    /// Markers matched as escaped literals, interior lazy across newlines
    fn marker_regex(&self) -> Result<Regex> {
        let pattern = format!(
            "(?s){}.*?{}",
            regex::escape(&self.markers.start),
            regex::escape(&self.markers.end),
        );
        Ok(Regex::new(&pattern)?)
    }
}
