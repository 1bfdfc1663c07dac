//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the
//! lectern binary.

mod analyze;
mod commands;
mod templates;

pub use analyze::handle_analyze;
pub use commands::{AnalyzeArgs, Cli, Commands};
pub use templates::handle_templates;

/// Template directory, overridable with `LECTERN_TEMPLATES_DIR`.
pub(crate) fn templates_dir() -> String {
    std::env::var("LECTERN_TEMPLATES_DIR").unwrap_or_else(|_| "templates".to_string())
}
