//! Command implementations for modkit-cli

pub mod copy;
pub mod hash;
pub mod status;

pub use copy::{run_pull, run_push};
pub use hash::run_hash;
pub use status::run_status;

use std::path::Path;

use modkit_core::{ConfigResolver, ToolConfig};
use modkit_fs::NormalizedPath;

use crate::error::Result;

/// Resolve the tool configuration for `root`, honouring `--config`.
pub fn resolve_config(root: &Path, config_file: Option<&Path>) -> Result<ToolConfig> {
    let mut resolver = ConfigResolver::new(NormalizedPath::new(root));
    if let Some(file) = config_file {
        resolver = resolver.with_config_file(NormalizedPath::new(file));
    }
    Ok(resolver.resolve()?)
}
