//! Push and pull command implementations
//!
//! Both move a single fixed-named file between the mod root and the
//! plugin's directory inside the game installation.

use std::path::{Path, PathBuf};

use colored::Colorize;
use modkit_core::{ArtifactCopier, CopyReport};

use super::resolve_config;
use crate::error::Result;

fn copier(
    root: &Path,
    config_file: Option<&Path>,
    install_dir: Option<PathBuf>,
) -> Result<ArtifactCopier> {
    let mut config = resolve_config(root, config_file)?;
    if let Some(dir) = install_dir {
        config.copy.install_dir = dir;
    }
    Ok(ArtifactCopier::new(root, config.copy))
}

fn print_report(report: &CopyReport) {
    println!(
        "{} {} -> {} ({} bytes)",
        "OK".green().bold(),
        report.from.display(),
        report.to.display().to_string().cyan(),
        report.bytes
    );
}

/// Run the push command
pub fn run_push(
    root: &Path,
    config_file: Option<&Path>,
    install_dir: Option<PathBuf>,
) -> Result<()> {
    let report = copier(root, config_file, install_dir)?.push_source()?;
    print_report(&report);
    Ok(())
}

/// Run the pull command
pub fn run_pull(
    root: &Path,
    config_file: Option<&Path>,
    install_dir: Option<PathBuf>,
) -> Result<()> {
    let report = copier(root, config_file, install_dir)?.pull_artifact()?;
    print_report(&report);
    Ok(())
}
