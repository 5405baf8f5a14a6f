//! Well-known file names in a mod checkout.

use std::path::Path;

/// Standard files found in a mod's source checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModPath {
    /// The `module.json` descriptor read by the mod loader
    ModuleDescriptor,
    /// The per-installation `config.json`, never hashed
    InstallConfig,
    /// The `modkit.toml` tool configuration
    ToolConfig,
    /// The `main.cs` plugin source pushed to the installation
    PluginSource,
    /// The `SyncPlugin.dll` compiled plugin pulled from the installation
    PluginArtifact,
    /// The `Release.zip` packaging artifact
    ReleaseArchive,
    /// The legacy `hash.py` manifest script
    LegacyHashScript,
    /// The `.git` directory
    GitDir,
}

impl ModPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ModuleDescriptor => "module.json",
            Self::InstallConfig => "config.json",
            Self::ToolConfig => "modkit.toml",
            Self::PluginSource => "main.cs",
            Self::PluginArtifact => "SyncPlugin.dll",
            Self::ReleaseArchive => "Release.zip",
            Self::LegacyHashScript => "hash.py",
            Self::GitDir => ".git",
        }
    }
}

impl AsRef<Path> for ModPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for ModPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ModPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
