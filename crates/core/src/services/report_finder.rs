//! One-off search for report files already on disk

use glob::Pattern;
use std::fs;
use std::path::{Path, PathBuf};

use super::notify_watch::matches_report;
use crate::error::Result;

/// Directories never descended into
const SKIPPED_DIRS: &[&str] = &[".git", "node_modules"];

/// Every file under `root` matching the report glob, sorted by path.
///
/// Symlinked directories are not followed. Directories that cannot be read
/// are logged and skipped.
pub fn find_reports(glob: &str, root: &Path) -> Result<Vec<PathBuf>> {
    let pattern = Pattern::new(glob)?;
    let root = root.canonicalize()?;

    let mut found = Vec::new();
    let mut pending = vec![root.clone()];
    while let Some(dir) = pending.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!("Skipping {}: {e}", dir.display());
                continue;
            }
        };

        for entry in entries.flatten() {
            let Ok(file_type) = entry.file_type() else {
                continue;
            };
            let path = entry.path();
            if file_type.is_dir() {
                if !SKIPPED_DIRS.iter().any(|skip| entry.file_name() == *skip) {
                    pending.push(path);
                }
            } else if matches_report(&pattern, &root, &path) {
                found.push(path);
            }
        }
    }

    found.sort();
    tracing::debug!("Found {} report(s) under {}", found.len(), root.display());
    Ok(found)
}
