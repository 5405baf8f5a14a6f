//! Configuration resolution
//!
//! The `ConfigResolver` produces the effective [`ToolConfig`] for a mod root:
//! 1. Built-in defaults
//! 2. `<root>/modkit.toml`, or an explicitly given config file instead
//!
//! Sections and fields missing from the file keep their default values.

use modkit_fs::{ConfigStore, ModPath, NormalizedPath};
use tracing::debug;

use super::ToolConfig;
use crate::Result;

pub struct ConfigResolver {
    /// Mod root directory
    root: NormalizedPath,

    /// Explicit config file; must exist when set
    explicit: Option<NormalizedPath>,
}

impl ConfigResolver {
    /// Create a resolver for the given mod root.
    pub fn new(root: NormalizedPath) -> Self {
        Self {
            root,
            explicit: None,
        }
    }

    /// Use `path` instead of `<root>/modkit.toml`.
    pub fn with_config_file(mut self, path: NormalizedPath) -> Self {
        self.explicit = Some(path);
        self
    }

    /// The config file that `resolve` reads, if any.
    pub fn config_path(&self) -> NormalizedPath {
        self.explicit
            .clone()
            .unwrap_or_else(|| self.root.join(ModPath::ToolConfig.as_str()))
    }

    /// Resolve and validate the effective configuration.
    ///
    /// A missing `modkit.toml` is not an error; a missing explicit config
    /// file is. Invalid content in either produces an error.
    pub fn resolve(&self) -> Result<ToolConfig> {
        let path = self.config_path();

        let config = if self.explicit.is_some() || path.is_file() {
            debug!(path = %path, "loading tool configuration");
            ConfigStore::new().load::<ToolConfig>(&path)?
        } else {
            debug!(path = %path, "no tool configuration found, using defaults");
            ToolConfig::default()
        };

        config.validate()?;
        Ok(config)
    }
}
