//! Settings structures parsed from `modkit.toml`

use modkit_fs::ModPath;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{Error, Result};

/// Default game installation directory of the plugin.
const DEFAULT_INSTALL_DIR: &str = "D:/mods/mhw/HunterPie/modules/SyncPlugin/";

fn default_exclude() -> Vec<String> {
    [
        ModPath::ModuleDescriptor.as_str(),
        ModPath::LegacyHashScript.as_str(),
        ModPath::PluginSource.as_str(),
        ModPath::ReleaseArchive.as_str(),
        "README.md",
        "LICENSE",
        ".gitattributes",
        ".gitignore",
        ModPath::GitDir.as_str(),
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// `[hash]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashSettings {
    /// Descriptor file name, relative to the mod root
    pub descriptor: String,

    /// Base names never hashed or descended into
    pub exclude: Vec<String>,

    /// Appended to `exclude`, so the defaults can be kept while adding more
    pub extra_exclude: Vec<String>,

    /// Base names recorded as `InstallOnly` without reading their content
    pub install_only: Vec<String>,
}

impl Default for HashSettings {
    fn default() -> Self {
        Self {
            descriptor: ModPath::ModuleDescriptor.as_str().to_string(),
            exclude: default_exclude(),
            extra_exclude: Vec::new(),
            install_only: vec![ModPath::InstallConfig.as_str().to_string()],
        }
    }
}

/// `[copy]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopySettings {
    /// Plugin directory inside the game installation; must already exist
    pub install_dir: PathBuf,

    /// Pushed from the mod root into `install_dir`
    pub source_file: String,

    /// Pulled from `install_dir` into the mod root
    pub artifact_file: String,
}

impl Default for CopySettings {
    fn default() -> Self {
        Self {
            install_dir: PathBuf::from(DEFAULT_INSTALL_DIR),
            source_file: ModPath::PluginSource.as_str().to_string(),
            artifact_file: ModPath::PluginArtifact.as_str().to_string(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    pub hash: HashSettings,
    pub copy: CopySettings,
}

impl ToolConfig {
    /// Validate the configuration.
    ///
    /// File names must be non-empty bare names: they are joined onto the
    /// mod root and the installation directory.
    pub fn validate(&self) -> Result<()> {
        let names = [
            ("hash.descriptor", &self.hash.descriptor),
            ("copy.source_file", &self.copy.source_file),
            ("copy.artifact_file", &self.copy.artifact_file),
        ];

        let mut problems: Vec<String> = names
            .iter()
            .filter_map(|(field, value)| {
                if value.is_empty() {
                    Some(format!("{field} cannot be empty"))
                } else if value.contains(['/', '\\']) {
                    Some(format!("{field} must be a file name, got '{value}'"))
                } else {
                    None
                }
            })
            .collect();

        if self.copy.install_dir.as_os_str().is_empty() {
            problems.push("copy.install_dir cannot be empty".into());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(Error::InvalidConfig {
                message: problems.join("; "),
            })
        }
    }
}
