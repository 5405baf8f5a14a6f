//! Recursive manifest computation over a directory tree

use modkit_fs::NormalizedPath;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

use super::rules::{HashRules, type_based_digest};
use super::{FileHash, Manifest};
use crate::{Error, Result};

/// Compute the manifest for everything under `root` with the default rules.
pub fn compute_manifest(root: &Path) -> Result<Manifest> {
    compute_manifest_with(root, &HashRules::default())
}

/// Compute the manifest for everything under `root`.
///
/// Keys are relative to `root` and joined with `/`. The traversal is
/// depth-first in sorted name order, and any unreadable entry or digest
/// failure aborts the whole computation.
///
/// # Errors
///
/// - [`Error::NotFound`] if `root` does not exist or is not a directory
/// - [`Error::Traversal`] if a directory or file cannot be read mid-scan,
///   or an entry name is not valid UTF-8
/// - [`Error::Decode`] if a text file is not valid UTF-8
pub fn compute_manifest_with(root: &Path, rules: &HashRules) -> Result<Manifest> {
    if !root.is_dir() {
        return Err(Error::NotFound {
            path: root.to_path_buf(),
        });
    }

    let manifest = scan_dir(root, &NormalizedPath::empty(), rules)?;
    if manifest.is_empty() {
        warn!(root = %root.display(), "no files to hash");
    }
    info!(
        root = %root.display(),
        files = manifest.digest_count(),
        install_only = manifest.install_only_count(),
        "computed manifest"
    );
    Ok(manifest)
}

/// Scan one directory and return the manifest of its subtree.
fn scan_dir(dir: &Path, prefix: &NormalizedPath, rules: &HashRules) -> Result<Manifest> {
    let mut entries = fs::read_dir(dir)
        .map_err(|e| Error::traversal(dir, e))?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| Error::traversal(dir, e))?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut manifest = Manifest::new();
    for entry in entries {
        let path = entry.path();
        // Keys are recorded as JSON strings, so the name must be exact UTF-8
        let name = entry.file_name().into_string().map_err(|_| {
            Error::traversal(
                &path,
                std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    "file name is not valid UTF-8",
                ),
            )
        })?;

        if rules.is_excluded(&name) {
            debug!(path = %path.display(), "excluded");
            continue;
        }

        let key = prefix.join(&name);

        if rules.is_install_only(&name) {
            debug!(key = %key, "install-only");
            manifest.insert(key, FileHash::InstallOnly);
            continue;
        }

        // Follows symlinks, so a linked directory is scanned like a real one
        if path.is_dir() {
            manifest.merge(scan_dir(&path, &key, rules)?)?;
        } else {
            let digest = type_based_digest(&path)?;
            debug!(key = %key, digest = %digest, "hashed");
            manifest.insert(key, FileHash::Digest(digest));
        }
    }

    Ok(manifest)
}
