//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// modkit - Release tooling for HunterPie plugin mods
#[derive(Parser, Debug)]
#[command(name = "modkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Mod root directory (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Tool configuration file (defaults to <root>/modkit.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Hash the mod tree and record the result in the module descriptor
    ///
    /// Replaces `Update.FileHashes` in module.json; every other field is
    /// left as it was.
    Hash {
        /// Compute and print the manifest without writing the descriptor
        #[arg(long)]
        dry_run: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Copy the plugin source into the game installation
    Push {
        /// Plugin directory inside the game installation
        #[arg(long, env = "MODKIT_INSTALL_DIR", value_name = "DIR")]
        install_dir: Option<PathBuf>,
    },

    /// Copy the compiled plugin back from the game installation
    Pull {
        /// Plugin directory inside the game installation
        #[arg(long, env = "MODKIT_INSTALL_DIR", value_name = "DIR")]
        install_dir: Option<PathBuf>,
    },

    /// Show the resolved configuration and the descriptor's recorded hashes
    Status {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
