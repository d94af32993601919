//! Render command: print the documentation fragment to stdout

use actiondocs_metadata::ActionMetadata;

use crate::config::RenderConfig;
use crate::error::Result;

/// Run the render command
pub fn run_render(config: &RenderConfig) -> Result<()> {
    let metadata = ActionMetadata::load(&config.action_file)?;
    let fragment = actiondocs_render::render(&metadata, &config.options)?;
    println!("{fragment}");
    Ok(())
}
