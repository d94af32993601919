//! Action documentation generator CLI
//!
//! Renders action metadata into markdown tables and splices the result
//! into a target document between two marker lines.

mod cli;
mod commands;
mod config;
mod error;
mod gha;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        if gha::in_runner() {
            println!("{}", gha::error_command(&e.to_string()));
        } else {
            eprintln!("{}: {}", "error".red().bold(), e);
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Step debug logging on the runner implies verbose
    let level = if cli.verbose || gha::runner_debug() {
        Level::DEBUG
    } else {
        Level::INFO
    };
    // Logs go to stderr; stdout is reserved for rendered output
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    match cli.command {
        Some(Commands::Render { render }) => {
            let config = config::resolve_render(&render)?;
            commands::run_render(&config)
        }
        Some(Commands::Inject { render, target }) => {
            let config = config::resolve_inject(&render, &target)?;
            commands::run_inject(&config)
        }
        None => {
            println!("{} Action documentation generator", "actiondocs".green().bold());
            println!();
            println!("Run {} for available commands.", "actiondocs --help".cyan());
            Ok(())
        }
    }
}
