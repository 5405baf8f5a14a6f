//! Tool configuration
//!
//! Settings come from built-in defaults, overlaid by an optional
//! `modkit.toml` at the mod root (or an explicit config file), then by
//! command-line overrides applied by the caller.

mod resolver;
mod settings;

pub use resolver::ConfigResolver;
pub use settings::{CopySettings, HashSettings, ToolConfig};
