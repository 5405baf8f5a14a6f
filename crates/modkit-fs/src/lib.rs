//! Filesystem layer for modkit
//!
//! Provides forward-slash path handling, SHA-256 digests, and safe I/O
//! operations shared by the manifest hasher and the artifact copier.

pub mod checksum;
pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use constants::ModPath;
pub use error::{Error, Result};
pub use path::NormalizedPath;
