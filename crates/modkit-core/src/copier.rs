//! Artifact transfer between the mod checkout and the game installation

use modkit_fs::io;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::CopySettings;
use crate::{Error, Result};

/// Outcome of a single copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyReport {
    pub from: PathBuf,
    pub to: PathBuf,
    pub bytes: u64,
}

/// Copies fixed-named files to and from the plugin's installation directory.
///
/// Both directions check that the installation directory exists before
/// touching any file.
#[derive(Debug, Clone)]
pub struct ArtifactCopier {
    root: PathBuf,
    settings: CopySettings,
}

impl ArtifactCopier {
    pub fn new(root: impl Into<PathBuf>, settings: CopySettings) -> Self {
        Self {
            root: root.into(),
            settings,
        }
    }

    pub fn install_dir(&self) -> &Path {
        &self.settings.install_dir
    }

    fn require_install_dir(&self) -> Result<&Path> {
        let dir = self.install_dir();
        if dir.is_dir() {
            Ok(dir)
        } else {
            Err(Error::ConfigurationMissing {
                path: dir.to_path_buf(),
            })
        }
    }

    /// Copy the plugin source from the mod root into the installation.
    pub fn push_source(&self) -> Result<CopyReport> {
        let install_dir = self.require_install_dir()?;
        let name = &self.settings.source_file;
        copy(&self.root.join(name), &install_dir.join(name))
    }

    /// Copy the compiled plugin from the installation into the mod root.
    pub fn pull_artifact(&self) -> Result<CopyReport> {
        let install_dir = self.require_install_dir()?;
        let name = &self.settings.artifact_file;
        copy(&install_dir.join(name), &self.root.join(name))
    }
}

fn copy(from: &Path, to: &Path) -> Result<CopyReport> {
    let bytes = io::copy_file(from, to)?;
    info!(from = %from.display(), to = %to.display(), bytes, "copied");
    Ok(CopyReport {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        bytes,
    })
}
