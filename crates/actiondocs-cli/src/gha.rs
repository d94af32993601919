//! GitHub Actions workflow command output
//!
//! https://docs.github.com/en/actions/using-workflows/workflow-commands-for-github-actions

use std::fmt;

use crate::error::{CliError, Result};

/// Parameters accepted by annotation commands
const ALLOWED_ANNOTATION_PARAMS: &[&str] = &["file", "line", "endLine", "title"];

/// A workflow command of the form `::name k=v,...::value`
#[derive(Debug, Clone)]
pub struct WorkflowCommand {
    name: &'static str,
    value: String,
    params: Vec<(&'static str, String)>,
}

impl WorkflowCommand {
    pub fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
            params: Vec::new(),
        }
    }

    /// Attach an annotation parameter
    pub fn with_param(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.params.push((key, value.into()));
        self
    }

    /// Check annotation parameter constraints.
    ///
    /// `line` is meaningless without `file`, and `endLine` without `line`;
    /// the runner silently drops such annotations, so reject them here.
    pub fn validate_annotation(&self) -> Result<()> {
        for (key, _) in &self.params {
            if !ALLOWED_ANNOTATION_PARAMS.contains(key) {
                return Err(CliError::user(format!(
                    "Unknown annotation parameter `{key}`"
                )));
            }
        }

        let has = |name: &str| self.params.iter().any(|(key, _)| *key == name);
        if has("line") && !has("file") {
            return Err(CliError::user("'line' requires 'file'"));
        }
        if has("endLine") && !has("line") {
            return Err(CliError::user("'endLine' requires 'line'"));
        }
        Ok(())
    }
}

impl fmt::Display for WorkflowCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.params.is_empty() {
            write!(f, "::{}::{}", self.name, self.value)
        } else {
            let params: Vec<String> = self
                .params
                .iter()
                .map(|(key, value)| format!("{key}={value}"))
                .collect();
            write!(f, "::{} {}::{}", self.name, params.join(","), self.value)
        }
    }
}

/// An `::error::` annotation for the given message
pub fn error_command(message: &str) -> WorkflowCommand {
    WorkflowCommand::new("error", message)
}

/// True when running under a GitHub Actions runner
pub fn in_runner() -> bool {
    std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true")
}

/// True when GitHub Actions step debug logging is enabled
pub fn runner_debug() -> bool {
    std::env::var("ACTIONS_RUNNER_DEBUG").is_ok_and(|v| v == "true")
}
