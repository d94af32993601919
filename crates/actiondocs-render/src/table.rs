//! Markdown table generation for action inputs and outputs

use actiondocs_metadata::ActionMetadata;
use serde_yaml::Value;

use crate::cell::markdown_to_table_html;
use crate::error::{Error, Result};

/// Rendered in place of a table when the section is absent
const NONE_PLACEHOLDER: &str = "None";

/// Generate the `inputs` section as a markdown table.
///
/// Rows follow the mapping's insertion order. Multi-line descriptions are
/// converted to minified HTML that GitHub renders correctly in table
/// cells; single-line descriptions pass through verbatim.
pub fn inputs_table(metadata: &ActionMetadata) -> Result<String> {
    let Some(inputs) = metadata.inputs() else {
        tracing::info!("Inputs: None");
        return Ok(NONE_PLACEHOLDER.to_string());
    };
    tracing::info!("Inputs: {}", inputs.len());

    let mut rows = Vec::with_capacity(inputs.len() + 2);
    rows.push("|Input|Description|Default|Required|".to_string());
    rows.push("|-----|-----------|-------|:------:|".to_string());

    for (key, spec) in inputs {
        let Some(name) = scalar_to_string(key) else {
            continue;
        };
        let name = name.as_str();

        // <input_id>.description (required)
        // <input_id>.deprecationMessage (optional)
        let mut desc = description(name, spec)?;
        if let Some(message) = spec.get("deprecationMessage").and_then(Value::as_str) {
            desc = format!("{desc}\n\n**Depricated:** {}", message.trim_end());
        }
        let desc = markdown_to_table_html(&desc);

        // <input_id>.default (optional)
        let default = match spec.get("default").and_then(scalar_to_string) {
            Some(value) => format!("`{}`", value.trim_end()),
            None => "n/a".to_string(),
        };

        // <input_id>.required (optional, defaults to false)
        let required = spec
            .get("required")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let required = if required { "yes" } else { "no" };

        rows.push(format!("|`{name}`|{desc}|{default}|{required}|"));
    }

    Ok(rows.join("\n"))
}

/// Generate the `outputs` section as a markdown table
pub fn outputs_table(metadata: &ActionMetadata) -> Result<String> {
    let Some(outputs) = metadata.outputs() else {
        tracing::info!("Outputs: None");
        return Ok(NONE_PLACEHOLDER.to_string());
    };
    tracing::info!("Outputs: {}", outputs.len());

    let mut rows = Vec::with_capacity(outputs.len() + 2);
    rows.push("|Output|Description|".to_string());
    rows.push("|------|-----------|".to_string());

    for (key, spec) in outputs {
        let Some(name) = scalar_to_string(key) else {
            continue;
        };

        let desc = markdown_to_table_html(&description(&name, spec)?);
        rows.push(format!("|`{name}`|{desc}|"));
    }

    Ok(rows.join("\n"))
}

/// Extract the required `description` attribute of a field.
///
/// Trailing whitespace is stripped so YAML block scalars never leak their
/// trailing newline into a cell.
fn description(name: &str, spec: &Value) -> Result<String> {
    spec.get("description")
        .and_then(Value::as_str)
        .map(|s| s.trim_end().to_string())
        .ok_or_else(|| Error::missing_field(name, "description"))
}

/// Render a scalar YAML value (a field name or a default) as text
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
