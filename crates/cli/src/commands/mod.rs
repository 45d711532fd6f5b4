pub mod config;
pub mod port;
pub mod reports;
pub mod resolve;
pub mod run;
pub mod sections;

pub use config::{config_init_command, config_show_command};
pub use port::port_command;
pub use reports::reports_command;
pub use resolve::resolve_command;
pub use run::{debug_command, run_command};
pub use sections::sections_command;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Absolute form of a user-supplied path; the target must exist
pub(crate) fn absolute_target(path: &Path) -> Result<PathBuf> {
    path.canonicalize()
        .with_context(|| format!("Failed to resolve path {}", path.display()))
}
