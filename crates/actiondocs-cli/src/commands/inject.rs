//! Inject command: splice the rendered fragment into the target document

use std::fs;

use colored::Colorize;

use actiondocs_metadata::ActionMetadata;
use actiondocs_splice::Splicer;

use crate::config::InjectConfig;
use crate::error::{CliError, Result};
use crate::gha;

/// Run the inject command.
///
/// Loads the metadata, renders the fragment, replaces the marker span in
/// the target file, and writes the file back in place.
pub fn run_inject(config: &InjectConfig) -> Result<()> {
    let metadata = ActionMetadata::load(&config.render.action_file)?;
    let fragment = actiondocs_render::render(&metadata, &config.render.options)?;

    let document = fs::read_to_string(&config.target_file).map_err(|e| CliError::Read {
        path: config.target_file.clone(),
        source: e,
    })?;

    let splicer = Splicer::new(config.markers.clone());
    let updated = splicer.splice(&document, &fragment)?;

    if !splicer.has_span(&document)? {
        tracing::warn!(
            "No marker pair found in '{}'; document left unchanged",
            config.target_file.display()
        );
        if gha::in_runner() {
            let annotation = gha::WorkflowCommand::new(
                "warning",
                "No marker pair found; document left unchanged",
            )
            .with_param("file", config.target_file.display().to_string());
            annotation.validate_annotation()?;
            println!("{annotation}");
        }
    }

    fs::write(&config.target_file, &updated).map_err(|e| CliError::Write {
        path: config.target_file.clone(),
        source: e,
    })?;
    tracing::info!("Wrote to '{}'", config.target_file.display());

    println!(
        "{} Updated {}",
        "OK".green().bold(),
        config.target_file.display().to_string().cyan()
    );
    Ok(())
}
