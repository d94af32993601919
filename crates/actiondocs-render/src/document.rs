//! Full documentation fragment assembly

use actiondocs_metadata::ActionMetadata;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::table::{inputs_table, outputs_table};

/// Options controlling which sections are rendered and at what heading depth
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Render the `Inputs` section
    pub include_inputs: bool,
    /// Render the `Outputs` section
    pub include_outputs: bool,
    /// Number of leading `#` characters on section headings (>= 1)
    pub heading_level: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_inputs: true,
            include_outputs: true,
            heading_level: 3,
        }
    }
}

/// Render the full documentation fragment for an action.
///
/// Produces the concatenation of the selected sections, each a heading
/// followed by its table. The final section carries no trailing newline.
pub fn render(metadata: &ActionMetadata, options: &RenderOptions) -> Result<String> {
    let heading = "#".repeat(options.heading_level);
    let mut md = String::new();

    if options.include_inputs {
        md.push_str(&heading);
        md.push_str(" Inputs\n");
        md.push_str(&inputs_table(metadata)?);
        md.push('\n');
    }

    if options.include_outputs {
        md.push_str(&heading);
        md.push_str(" Outputs\n");
        md.push_str(&outputs_table(metadata)?);
    }

    for (index, line) in md.lines().enumerate() {
        tracing::debug!("Markdown line {index:03}: {line}");
    }

    Ok(md)
}
