//! modkit CLI
//!
//! Release tooling for a HunterPie plugin mod: hashes the mod tree into
//! `module.json` and moves the plugin between the checkout and the game.

mod cli;
mod commands;
mod error;

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let root = resolve_root(cli.root)?;
    let config = cli.config.as_deref();

    match cli.command {
        Some(Commands::Hash { dry_run, json }) => commands::run_hash(&root, config, dry_run, json),
        Some(Commands::Push { install_dir }) => commands::run_push(&root, config, install_dir),
        Some(Commands::Pull { install_dir }) => commands::run_pull(&root, config, install_dir),
        Some(Commands::Status { json }) => commands::run_status(&root, config, json),
        None => {
            // No command provided - show help hint
            println!("{} mod release tooling", "modkit".green().bold());
            println!();
            println!("Run {} for available commands.", "modkit --help".cyan());
            Ok(())
        }
    }
}

/// Log to stderr. `RUST_LOG` wins; otherwise `--verbose` enables debug
/// output for the modkit crates and everything else stays at warn.
fn init_logging(verbose: bool) {
    let default = if verbose { "warn,modkit=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .init();

    tracing::debug!("Verbose mode enabled");
}

/// The mod root: `--root` if given, else the current directory.
fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf> {
    match root {
        Some(path) if path.is_dir() => Ok(path),
        Some(path) => Err(CliError::user(format!(
            "mod root is not a directory: {}",
            path.display()
        ))),
        None => Ok(std::env::current_dir()?),
    }
}
