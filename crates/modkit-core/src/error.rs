//! Error types for modkit-core

use std::path::PathBuf;

/// Result type for modkit-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in modkit-core operations
///
/// Every variant is fatal for the current run; nothing is retried and no
/// partial manifest is ever persisted.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configured installation directory does not exist
    #[error("Installation directory not found: {path}")]
    ConfigurationMissing { path: PathBuf },

    /// The scan root does not exist or is not a directory
    #[error("Scan root not found or not a directory: {path}")]
    NotFound { path: PathBuf },

    /// A path disappeared or became unreadable mid-scan
    #[error("Failed to read {path} during scan: {source}")]
    Traversal {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A text-bucketed file is not valid UTF-8
    #[error("File is not valid UTF-8 text: {path} (invalid byte at offset {offset})")]
    Decode { path: PathBuf, offset: usize },

    /// Two scanned entries mapped to the same manifest key
    #[error("Duplicate manifest key: {key}")]
    DuplicateKey { key: String },

    /// The module descriptor is missing or malformed
    #[error("Invalid module descriptor {path}: {message}")]
    DescriptorFormat { path: PathBuf, message: String },

    /// The tool configuration failed validation
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Filesystem error from modkit-fs
    #[error(transparent)]
    Fs(#[from] modkit_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn traversal(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Traversal {
            path: path.into(),
            source,
        }
    }

    pub fn descriptor(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::DescriptorFormat {
            path: path.into(),
            message: message.into(),
        }
    }
}
