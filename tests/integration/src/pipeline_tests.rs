//! End-to-end pipeline tests
//!
//! Exercises the complete flow over real files: load metadata -> render
//! the fragment -> splice it into a README -> write the result back.

use std::fs;
use std::path::PathBuf;

use actiondocs_metadata::ActionMetadata;
use actiondocs_render::{RenderOptions, render};
use actiondocs_splice::{MarkerPair, Splicer};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const ACTION_YAML: &str = "\
name: setup-widgets
description: Install widgets into the workspace
inputs:
  version:
    description: Widget version to install
    default: latest
  token:
    description: |
      API token.

      Scoped to `read:widgets`.
    required: true
outputs:
  widget-path:
    description: Where the widget landed
";

const README: &str = "\
# setup-widgets

Installs widgets.

<!--doc_begin-->
stale content
<!--doc_end-->

## License

MIT
";

/// Write the fixture files and return (action.yml path, README path)
fn setup(dir: &TempDir) -> (PathBuf, PathBuf) {
    let action_file = dir.path().join("action.yml");
    let readme = dir.path().join("README.md");
    fs::write(&action_file, ACTION_YAML).unwrap();
    fs::write(&readme, README).unwrap();
    (action_file, readme)
}

fn run_pipeline(action_file: &PathBuf, readme: &PathBuf) -> String {
    let metadata = ActionMetadata::load(action_file).unwrap();
    let fragment = render(&metadata, &RenderOptions::default()).unwrap();
    let splicer = Splicer::new(MarkerPair::default());

    let document = fs::read_to_string(readme).unwrap();
    let updated = splicer.splice(&document, &fragment).unwrap();
    fs::write(readme, &updated).unwrap();
    updated
}

#[test]
fn full_pipeline_rewrites_the_readme() {
    let dir = TempDir::new().unwrap();
    let (action_file, readme) = setup(&dir);

    let updated = run_pipeline(&action_file, &readme);

    let expected = "\
# setup-widgets

Installs widgets.

<!--doc_begin-->
### Inputs
|Input|Description|Default|Required|
|-----|-----------|-------|:------:|
|`version`|Widget version to install|`latest`|no|
|`token`|<p>API token.</p><p>Scoped to <code>read:widgets</code>.</p>|n/a|yes|
### Outputs
|Output|Description|
|------|-----------|
|`widget-path`|Where the widget landed|
<!--doc_end-->

## License

MIT
";
    assert_eq!(updated, expected);
    assert_eq!(fs::read_to_string(&readme).unwrap(), expected);
}

#[test]
fn rerunning_the_pipeline_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let (action_file, readme) = setup(&dir);

    let first = run_pipeline(&action_file, &readme);
    let second = run_pipeline(&action_file, &readme);
    assert_eq!(first, second);
}

#[test]
fn readme_without_markers_is_left_alone() {
    let dir = TempDir::new().unwrap();
    let (action_file, readme) = setup(&dir);
    fs::write(&readme, "# No markers here\n").unwrap();

    let updated = run_pipeline(&action_file, &readme);
    assert_eq!(updated, "# No markers here\n");
}

#[test]
fn sections_can_be_rendered_independently() {
    let dir = TempDir::new().unwrap();
    let (action_file, _) = setup(&dir);

    let metadata = ActionMetadata::load(&action_file).unwrap();
    let options = RenderOptions {
        include_inputs: false,
        include_outputs: true,
        heading_level: 4,
    };

    let fragment = render(&metadata, &options).unwrap();
    assert_eq!(
        fragment,
        "#### Outputs\n|Output|Description|\n|------|-----------|\n|`widget-path`|Where the widget landed|"
    );
}
