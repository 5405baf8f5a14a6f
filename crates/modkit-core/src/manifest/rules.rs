//! Hashing rules: which files are skipped, which are install-only, and how
//! each remaining file's bytes are normalized before digesting.

use modkit_fs::ModPath;
use modkit_fs::checksum::{normalize_newlines, sha256_hex, strip_carriage_returns};
use std::collections::BTreeSet;
use std::path::Path;

use crate::config::HashSettings;
use crate::{Error, Result};

/// Byte normalization applied before a file is digested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestStrategy {
    /// Raw bytes, untouched
    Exact,
    /// Raw bytes with every `0x0D` removed
    StripCarriageReturns,
    /// UTF-8 decoded text with universal newlines, re-encoded as UTF-8
    DecodedText,
}

/// Ordered `(suffixes, strategy)` table. The first row whose suffix matches
/// the file name wins; anything unmatched is [`DigestStrategy::DecodedText`].
const DIGEST_TABLE: &[(&[&str], DigestStrategy)] = &[
    (&[".exe", ".dll", ".png"], DigestStrategy::Exact),
    (
        &[".xml", ".map", ".xaml", ".log", ".md"],
        DigestStrategy::StripCarriageReturns,
    ),
];

/// Pick the digest strategy for a file name.
///
/// Matching is a case-sensitive suffix check, so `icon.PNG` is text.
pub fn classify(file_name: &str) -> DigestStrategy {
    DIGEST_TABLE
        .iter()
        .find(|(suffixes, _)| suffixes.iter().any(|s| file_name.ends_with(s)))
        .map(|(_, strategy)| *strategy)
        .unwrap_or(DigestStrategy::DecodedText)
}

impl DigestStrategy {
    /// Digest already-read file content. `path` is only used for errors.
    pub fn digest(self, path: &Path, content: &[u8]) -> Result<String> {
        match self {
            Self::Exact => Ok(sha256_hex(content)),
            Self::StripCarriageReturns => Ok(sha256_hex(&strip_carriage_returns(content))),
            Self::DecodedText => {
                let text = std::str::from_utf8(content).map_err(|e| Error::Decode {
                    path: path.to_path_buf(),
                    offset: e.valid_up_to(),
                })?;
                Ok(sha256_hex(normalize_newlines(text).as_bytes()))
            }
        }
    }
}

impl std::fmt::Display for DigestStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Exact => "binary",
            Self::StripCarriageReturns => "binary (CR stripped)",
            Self::DecodedText => "text",
        };
        f.write_str(label)
    }
}

/// Compute the digest of a single file using its extension's strategy.
///
/// The file is opened, fully read, and closed before hashing.
pub fn type_based_digest(path: &Path) -> Result<String> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    let strategy = classify(&file_name);
    let content = std::fs::read(path).map_err(|e| Error::traversal(path, e))?;
    strategy.digest(path, &content)
}

/// Name-based rules applied to every directory entry during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashRules {
    excluded: BTreeSet<String>,
    install_only: BTreeSet<String>,
}

impl HashRules {
    pub fn new(
        excluded: impl IntoIterator<Item = impl Into<String>>,
        install_only: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            excluded: excluded.into_iter().map(Into::into).collect(),
            install_only: install_only.into_iter().map(Into::into).collect(),
        }
    }

    /// Build rules from resolved settings.
    ///
    /// The configured descriptor and the tool's own config file are always
    /// excluded, whatever the exclusion list says.
    pub fn from_settings(settings: &HashSettings) -> Self {
        let mut rules = Self::new(
            settings.exclude.iter().chain(&settings.extra_exclude).cloned(),
            settings.install_only.iter().cloned(),
        );
        rules.excluded.insert(settings.descriptor.clone());
        rules.excluded.insert(ModPath::ToolConfig.as_str().to_string());
        rules
    }

    /// Exact base-name match; applies at every depth and to directories too.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded.contains(name)
    }

    pub fn is_install_only(&self, name: &str) -> bool {
        self.install_only.contains(name)
    }

    pub fn excluded(&self) -> impl Iterator<Item = &str> {
        self.excluded.iter().map(String::as_str)
    }

    pub fn install_only(&self) -> impl Iterator<Item = &str> {
        self.install_only.iter().map(String::as_str)
    }
}

impl Default for HashRules {
    fn default() -> Self {
        Self::from_settings(&HashSettings::default())
    }
}
