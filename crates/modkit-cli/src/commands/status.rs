//! Status command implementation

use std::path::Path;

use colored::Colorize;
use modkit_core::{HashRules, Manifest, ModuleDescriptor, ToolConfig, compute_manifest_with};
use modkit_fs::NormalizedPath;
use serde::Serialize;

use super::resolve_config;
use crate::error::Result;

/// Difference between the recorded and the freshly computed manifest.
#[derive(Debug, Default, Serialize, PartialEq, Eq)]
struct Drift {
    added: Vec<String>,
    removed: Vec<String>,
    changed: Vec<String>,
}

impl Drift {
    fn between(recorded: &Manifest, current: &Manifest) -> Self {
        let mut drift = Self::default();
        for (key, hash) in current {
            match recorded.get(key) {
                None => drift.added.push(key.to_string()),
                Some(old) if old != hash => drift.changed.push(key.to_string()),
                Some(_) => {}
            }
        }
        drift.removed = recorded
            .keys()
            .filter(|key| !current.contains_key(key))
            .map(String::from)
            .collect();
        drift
    }

    fn is_clean(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }
}

/// Machine-readable result of `modkit status --json`
#[derive(Debug, Serialize)]
struct StatusOutput<'a> {
    root: String,
    config: &'a ToolConfig,
    excluded: Vec<&'a str>,
    install_only: Vec<&'a str>,
    install_dir_exists: bool,
    descriptor_found: bool,
    recorded_entries: Option<usize>,
    drift: Option<Drift>,
}

/// Run the status command
///
/// Reports the resolved configuration and whether the descriptor's
/// `Update.FileHashes` still matches the tree on disk.
pub fn run_status(root: &Path, config_file: Option<&Path>, json: bool) -> Result<()> {
    let config = resolve_config(root, config_file)?;
    let descriptor_path = NormalizedPath::new(root.join(&config.hash.descriptor));
    let install_dir_exists = config.copy.install_dir.is_dir();
    let rules = HashRules::from_settings(&config.hash);

    let recorded = if descriptor_path.is_file() {
        Some(
            ModuleDescriptor::load(&descriptor_path)?
                .file_hashes()?
                .unwrap_or_default(),
        )
    } else {
        None
    };

    let drift = match &recorded {
        Some(recorded) => {
            let current = compute_manifest_with(root, &rules)?;
            Some(Drift::between(recorded, &current))
        }
        None => None,
    };

    if json {
        let output = StatusOutput {
            root: root.display().to_string(),
            config: &config,
            excluded: rules.excluded().collect(),
            install_only: rules.install_only().collect(),
            install_dir_exists,
            descriptor_found: recorded.is_some(),
            recorded_entries: recorded.as_ref().map(Manifest::len),
            drift,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", "Mod Status".bold());
    println!();
    println!("{}:        {}", "Root".dimmed(), root.display());
    println!("{}:  {}", "Descriptor".dimmed(), config.hash.descriptor);
    println!(
        "{}:    {}",
        "Excluded".dimmed(),
        rules.excluded().collect::<Vec<_>>().join(", ")
    );
    println!(
        "{}: {}",
        "Install-only".dimmed(),
        rules.install_only().collect::<Vec<_>>().join(", ")
    );
    let install = config.copy.install_dir.display().to_string();
    if install_dir_exists {
        println!("{}:     {}", "Install".dimmed(), install.cyan());
    } else {
        println!("{}:     {} ({})", "Install".dimmed(), install, "missing".yellow());
    }
    println!();

    let (Some(recorded), Some(drift)) = (recorded, drift) else {
        println!("{} {} not found", "!".yellow(), config.hash.descriptor);
        return Ok(());
    };

    println!("{}: {} recorded", "File Hashes".bold(), recorded.len());
    if drift.is_clean() {
        println!("  {} up to date", "OK".green().bold());
        return Ok(());
    }
    for key in &drift.added {
        println!("  {} {}", "+".green(), key);
    }
    for key in &drift.changed {
        println!("  {} {}", "~".yellow(), key);
    }
    for key in &drift.removed {
        println!("  {} {}", "-".red(), key);
    }
    println!();
    println!("Run {} to update.", "modkit hash".cyan());

    Ok(())
}
