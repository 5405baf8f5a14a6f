//! File manifests for update verification
//!
//! A [`Manifest`] maps every shippable file of a mod (by root-relative,
//! `/`-separated path) to either its content digest or the
//! [`FileHash::InstallOnly`] sentinel.

mod hasher;
mod rules;

pub use hasher::{compute_manifest, compute_manifest_with};
pub use rules::{DigestStrategy, HashRules, classify, type_based_digest};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::{Error, Result};

/// Sentinel written in place of a digest for per-installation files.
pub const INSTALL_ONLY: &str = "InstallOnly";

/// The recorded value for one file in a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FileHash {
    /// Lowercase hex SHA-256 of the normalized content
    Digest(String),
    /// The file ships once and is never compared afterwards
    InstallOnly,
}

impl FileHash {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Digest(hex) => hex,
            Self::InstallOnly => INSTALL_ONLY,
        }
    }

    pub fn is_install_only(&self) -> bool {
        matches!(self, Self::InstallOnly)
    }
}

impl From<String> for FileHash {
    fn from(value: String) -> Self {
        if value == INSTALL_ONLY {
            Self::InstallOnly
        } else {
            Self::Digest(value)
        }
    }
}

impl From<FileHash> for String {
    fn from(value: FileHash) -> Self {
        match value {
            FileHash::Digest(hex) => hex,
            FileHash::InstallOnly => INSTALL_ONLY.to_string(),
        }
    }
}

/// Path-to-hash mapping for a whole directory tree.
///
/// Backed by a `BTreeMap` so serialized output is sorted by key and
/// identical across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: BTreeMap<String, FileHash>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, hash: FileHash) -> Option<FileHash> {
        self.entries.insert(key.into(), hash)
    }

    pub fn get(&self, key: &str) -> Option<&FileHash> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FileHash)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries carrying a content digest.
    pub fn digest_count(&self) -> usize {
        self.entries.values().filter(|v| !v.is_install_only()).count()
    }

    /// Number of entries carrying the install-only sentinel.
    pub fn install_only_count(&self) -> usize {
        self.entries.values().filter(|v| v.is_install_only()).count()
    }

    /// Merge a subtree manifest into this one by key union.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateKey`] if a key is already present. `self` keeps
    /// whatever was merged before the collision.
    pub fn merge(&mut self, other: Manifest) -> Result<()> {
        for (key, hash) in other.entries {
            match self.entries.entry(key) {
                Entry::Occupied(slot) => {
                    return Err(Error::DuplicateKey {
                        key: slot.key().clone(),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(hash);
                }
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = (&'a String, &'a FileHash);
    type IntoIter = std::collections::btree_map::Iter<'a, String, FileHash>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(String, FileHash)> for Manifest {
    fn from_iter<I: IntoIterator<Item = (String, FileHash)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
