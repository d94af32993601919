//! Configuration resolution with aggregated missing-value reporting
//!
//! CLI flags and their environment fallbacks arrive as optionals; this
//! module checks presence of everything a command needs and reports all
//! missing names in a single diagnostic.

use std::path::PathBuf;

use actiondocs_render::RenderOptions;
use actiondocs_splice::MarkerPair;

use crate::cli::{RenderArgs, TargetArgs};
use crate::error::{CliError, Result};

/// Fully resolved rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub action_file: PathBuf,
    pub options: RenderOptions,
}

/// Fully resolved inject configuration
#[derive(Debug, Clone)]
pub struct InjectConfig {
    pub render: RenderConfig,
    pub target_file: PathBuf,
    pub markers: MarkerPair,
}

/// Resolve the configuration for the render command
pub fn resolve_render(args: &RenderArgs) -> Result<RenderConfig> {
    let mut missing = Vec::new();
    let action_file = require(&args.action_file, "ACTION_YAML_FILE", &mut missing);
    let include_inputs = require(&args.include_inputs, "INCLUDE_INPUTS", &mut missing);
    let include_outputs = require(&args.include_outputs, "INCLUDE_OUTPUTS", &mut missing);
    let heading_level = require(&args.heading_level, "HEADING_SIZE", &mut missing);

    let (Some(action_file), Some(include_inputs), Some(include_outputs), Some(heading_level)) =
        (action_file, include_inputs, include_outputs, heading_level)
    else {
        return Err(CliError::missing_config(missing));
    };

    Ok(RenderConfig {
        action_file,
        options: options(include_inputs, include_outputs, heading_level)?,
    })
}

/// Resolve the configuration for the inject command
pub fn resolve_inject(render: &RenderArgs, target: &TargetArgs) -> Result<InjectConfig> {
    let mut missing = Vec::new();
    let action_file = require(&render.action_file, "ACTION_YAML_FILE", &mut missing);
    let include_inputs = require(&render.include_inputs, "INCLUDE_INPUTS", &mut missing);
    let include_outputs = require(&render.include_outputs, "INCLUDE_OUTPUTS", &mut missing);
    let heading_level = require(&render.heading_level, "HEADING_SIZE", &mut missing);
    let target_file = require(&target.target_file, "TARGET_FILE", &mut missing);
    let marker_start = require(&target.marker_start, "MARKER_START", &mut missing);
    let marker_end = require(&target.marker_end, "MARKER_END", &mut missing);

    let (
        Some(action_file),
        Some(include_inputs),
        Some(include_outputs),
        Some(heading_level),
        Some(target_file),
        Some(marker_start),
        Some(marker_end),
    ) = (
        action_file,
        include_inputs,
        include_outputs,
        heading_level,
        target_file,
        marker_start,
        marker_end,
    )
    else {
        return Err(CliError::missing_config(missing));
    };

    Ok(InjectConfig {
        render: RenderConfig {
            action_file,
            options: options(include_inputs, include_outputs, heading_level)?,
        },
        target_file,
        markers: MarkerPair::new(marker_start, marker_end),
    })
}

fn options(
    include_inputs: bool,
    include_outputs: bool,
    heading_level: usize,
) -> Result<RenderOptions> {
    if heading_level == 0 {
        return Err(CliError::user("HEADING_SIZE must be a positive integer"));
    }
    Ok(RenderOptions {
        include_inputs,
        include_outputs,
        heading_level,
    })
}

fn require<T: Clone>(
    value: &Option<T>,
    name: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<T> {
    match value {
        Some(v) => Some(v.clone()),
        None => {
            missing.push(name);
            None
        }
    }
}
