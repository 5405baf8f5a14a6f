//! Core layer for modkit
//!
//! This crate implements the developer tooling that runs before a mod
//! release is packaged:
//!
//! - **Manifest hashing**: walk the mod checkout and digest every shippable
//!   file with an extension-dependent normalization
//! - **Descriptor persistence**: replace `Update.FileHashes` in `module.json`
//!   while leaving every other field untouched
//! - **Artifact copying**: move the plugin source and the compiled plugin
//!   between the checkout and the game installation
//! - **Configuration resolution**: built-in defaults overlaid by `modkit.toml`
//!
//! # Architecture
//!
//! ```text
//!        modkit-cli
//!            |
//!       modkit-core
//!            |
//!        modkit-fs
//! ```
//!
//! # Example
//!
//! ```no_run
//! use modkit_core::{compute_manifest, persist};
//! use std::path::Path;
//!
//! fn main() -> modkit_core::Result<()> {
//!     let manifest = compute_manifest(Path::new("."))?;
//!     persist(&manifest, Path::new("module.json"))?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod copier;
pub mod descriptor;
pub mod error;
pub mod manifest;

pub use config::{ConfigResolver, CopySettings, HashSettings, ToolConfig};
pub use copier::{ArtifactCopier, CopyReport};
pub use descriptor::{ModuleDescriptor, persist};
pub use error::{Error, Result};
pub use manifest::{
    DigestStrategy, FileHash, HashRules, Manifest, classify, compute_manifest,
    compute_manifest_with, type_based_digest,
};
