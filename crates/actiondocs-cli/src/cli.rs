//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Action Docs - keep README documentation in sync with action metadata
#[derive(Parser, Debug)]
#[command(name = "actiondocs")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render the documentation fragment to stdout
    ///
    /// Loads the action metadata file and prints the generated markdown
    /// without touching any target document.
    ///
    /// Examples:
    ///   actiondocs render --action-file action.yml \
    ///     --include-inputs true --include-outputs true --heading-level 3
    Render {
        #[command(flatten)]
        render: RenderArgs,
    },

    /// Splice the rendered documentation into the target file
    ///
    /// Replaces the span between the start and end markers in the target
    /// file with a freshly rendered fragment, leaving the markers intact,
    /// and writes the file back in place. Every flag can also be supplied
    /// through its environment variable, which is how the published action
    /// invokes this binary.
    Inject {
        #[command(flatten)]
        render: RenderArgs,

        #[command(flatten)]
        target: TargetArgs,
    },
}

/// Arguments controlling fragment rendering
#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Path to the action metadata file
    #[arg(long, env = "ACTION_YAML_FILE")]
    pub action_file: Option<PathBuf>,

    /// Whether to render the Inputs section
    #[arg(long, env = "INCLUDE_INPUTS")]
    pub include_inputs: Option<bool>,

    /// Whether to render the Outputs section
    #[arg(long, env = "INCLUDE_OUTPUTS")]
    pub include_outputs: Option<bool>,

    /// Markdown heading level for the section titles
    #[arg(long, env = "HEADING_SIZE")]
    pub heading_level: Option<usize>,
}

/// Arguments selecting the splice target
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// File in which the substitution takes place
    #[arg(long, env = "TARGET_FILE")]
    pub target_file: Option<PathBuf>,

    /// Opening marker from which the substitution takes place
    #[arg(long, env = "MARKER_START")]
    pub marker_start: Option<String>,

    /// Closing marker up to which the substitution takes place
    #[arg(long, env = "MARKER_END")]
    pub marker_end: Option<String>,
}
