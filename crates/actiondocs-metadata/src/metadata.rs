//! Parsed action metadata document

use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::error::{Error, Result};

/// A parsed action metadata document.
///
/// Wraps the generic YAML tree without imposing a schema. Sections are
/// looked up dynamically, so malformed field shapes surface later, at
/// render time, rather than at load time.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionMetadata {
    root: Value,
}

impl ActionMetadata {
    /// Load metadata from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let root: Value =
            serde_yaml::from_str(&source).map_err(|e| Error::parse(path, e.to_string()))?;
        tracing::debug!("Loaded action metadata from '{}'", path.display());
        Ok(Self { root })
    }

    /// Parse metadata from an in-memory YAML string
    pub fn parse(source: &str) -> Result<Self> {
        let root: Value =
            serde_yaml::from_str(source).map_err(|e| Error::parse("<inline>", e.to_string()))?;
        Ok(Self { root })
    }

    /// Wrap an already parsed YAML tree
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// The `inputs` section, if present and a mapping
    pub fn inputs(&self) -> Option<&Mapping> {
        self.section("inputs")
    }

    /// The `outputs` section, if present and a mapping
    pub fn outputs(&self) -> Option<&Mapping> {
        self.section("outputs")
    }

    /// The top-level `name` field
    pub fn name(&self) -> Option<&str> {
        self.root.get("name").and_then(Value::as_str)
    }

    /// The top-level `description` field
    pub fn description(&self) -> Option<&str> {
        self.root.get("description").and_then(Value::as_str)
    }

    fn section(&self, key: &str) -> Option<&Mapping> {
        self.root.get(key).and_then(Value::as_mapping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_exposes_sections() {
        let metadata = ActionMetadata::parse(
            "name: test-action\ninputs:\n  in1:\n    description: desc\noutputs:\n  out1:\n    description: desc\n",
        )
        .unwrap();

        assert_eq!(metadata.name(), Some("test-action"));
        assert_eq!(metadata.inputs().map(|m| m.len()), Some(1));
        assert_eq!(metadata.outputs().map(|m| m.len()), Some(1));
    }

    #[test]
    fn top_level_name_and_description_are_exposed() {
        let metadata =
            ActionMetadata::parse("name: setup-widgets\ndescription: Installs widgets\n").unwrap();
        assert_eq!(metadata.name(), Some("setup-widgets"));
        assert_eq!(metadata.description(), Some("Installs widgets"));

        let bare = ActionMetadata::parse("inputs: {}\n").unwrap();
        assert_eq!(bare.name(), None);
        assert_eq!(bare.description(), None);
    }

    #[test]
    fn absent_section_is_none() {
        let metadata = ActionMetadata::parse("name: test-action\n").unwrap();
        assert!(metadata.inputs().is_none());
        assert!(metadata.outputs().is_none());
    }

    #[test]
    fn empty_section_is_distinct_from_absent() {
        let metadata = ActionMetadata::parse("inputs: {}\n").unwrap();
        assert_eq!(metadata.inputs().map(|m| m.len()), Some(0));
    }

    #[test]
    fn non_mapping_section_is_none() {
        let metadata = ActionMetadata::parse("inputs: just a string\n").unwrap();
        assert!(metadata.inputs().is_none());
    }

    #[test]
    fn mapping_preserves_insertion_order() {
        let metadata = ActionMetadata::parse(
            "inputs:\n  zeta:\n    description: z\n  alpha:\n    description: a\n",
        )
        .unwrap();

        let names: Vec<_> = metadata
            .inputs()
            .unwrap()
            .keys()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let result = ActionMetadata::load(Path::new("/nonexistent/action.yml"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn load_invalid_yaml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("action.yml");
        std::fs::write(&path, "inputs: [unclosed\n").unwrap();

        let result = ActionMetadata::load(&path);
        assert!(matches!(result, Err(Error::Parse { .. })));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("action.yml");
        std::fs::write(&path, "name: from-disk\n").unwrap();

        let metadata = ActionMetadata::load(&path).unwrap();
        assert_eq!(metadata.name(), Some("from-disk"));
    }
}
