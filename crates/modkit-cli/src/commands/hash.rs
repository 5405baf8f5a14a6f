//! Hash command implementation

use std::path::Path;

use colored::Colorize;
use modkit_core::{HashRules, Manifest, compute_manifest_with, persist};
use serde::Serialize;

use super::resolve_config;
use crate::error::Result;

/// Machine-readable result of `modkit hash --json`
#[derive(Debug, Serialize)]
struct HashOutput<'a> {
    descriptor: String,
    written: bool,
    files: &'a Manifest,
}

/// Run the hash command
///
/// Computes the manifest of `root` and, unless `dry_run` is set, replaces
/// `Update.FileHashes` in the descriptor with it.
pub fn run_hash(
    root: &Path,
    config_file: Option<&Path>,
    dry_run: bool,
    json: bool,
) -> Result<()> {
    let config = resolve_config(root, config_file)?;
    let rules = HashRules::from_settings(&config.hash);
    let descriptor = root.join(&config.hash.descriptor);

    let manifest = compute_manifest_with(root, &rules)?;
    if !dry_run {
        persist(&manifest, &descriptor)?;
    }

    if json {
        let output = HashOutput {
            descriptor: descriptor.display().to_string(),
            written: !dry_run,
            files: &manifest,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for (key, hash) in &manifest {
        if hash.is_install_only() {
            println!("  {} {}", key.cyan(), hash.as_str().yellow());
        } else {
            println!("  {} {}", key.cyan(), hash.as_str().dimmed());
        }
    }
    println!();

    let summary = format!(
        "{} files hashed, {} install-only",
        manifest.digest_count(),
        manifest.install_only_count()
    );
    if dry_run {
        println!(
            "{} {} (dry run, {} not written)",
            "=>".blue().bold(),
            summary,
            config.hash.descriptor
        );
    } else {
        println!(
            "{} {} -> {}",
            "OK".green().bold(),
            summary,
            config.hash.descriptor.cyan()
        );
    }

    Ok(())
}
