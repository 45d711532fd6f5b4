//! Walks from a target up to the nearest build descriptor

use std::path::Path;

use super::BuildSystemDetector;
use crate::{
    interfaces::FileSystem,
    services::StdFileSystem,
    types::{ProjectDetail, TargetKind},
};

/// Maps a file or folder target to its project root and build descriptor
pub struct ProjectResolver<F: FileSystem> {
    fs: F,
}

impl Default for ProjectResolver<StdFileSystem> {
    fn default() -> Self {
        Self::new(StdFileSystem)
    }
}

impl<F: FileSystem> ProjectResolver<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    /// Nearest ancestor with a marker wins; marker priority only breaks ties
    /// inside one directory. Returns an unresolved detail when the walk
    /// reaches the root without a match.
    pub fn resolve(&self, target: &Path, kind: TargetKind) -> ProjectDetail {
        let start = match kind {
            TargetKind::Directory => Some(target),
            TargetKind::File | TargetKind::Test => target.parent(),
        };

        for dir in start.into_iter().flat_map(Path::ancestors) {
            if dir.as_os_str().is_empty() {
                continue;
            }
            if let Some(run_file) = self.fs.detect(dir) {
                tracing::debug!(
                    "Resolved {} to project root {} via {}",
                    target.display(),
                    dir.display(),
                    run_file.display()
                );
                return ProjectDetail::new(dir, run_file);
            }
        }

        tracing::debug!("No build descriptor above {}", target.display());
        ProjectDetail::unresolved()
    }
}

/// Resolve against the real file system
pub fn resolve(target: &Path, kind: TargetKind) -> ProjectDetail {
    ProjectResolver::new(StdFileSystem).resolve(target, kind)
}
