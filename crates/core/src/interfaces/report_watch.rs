//! File watching for report artifacts

use std::path::{Path, PathBuf};

use crate::error::Result;

/// A live watch. Dropping it disposes the underlying watcher; no events are
/// observed afterwards.
pub trait ReportWatch {
    /// Paths created or modified since the last drain, in arrival order.
    /// May contain duplicates.
    fn drain(&mut self) -> Vec<PathBuf>;
}

pub trait WatchFactory {
    /// Start watching `root` for files matching `glob` (relative to `root`)
    fn watch(&self, glob: &str, root: &Path) -> Result<Box<dyn ReportWatch>>;
}
