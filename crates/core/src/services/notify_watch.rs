//! Report watching backed by `notify`

use glob::{MatchOptions, Pattern};
use notify::{Config as WatcherConfig, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};

use crate::{
    error::Result,
    interfaces::{ReportWatch, WatchFactory},
};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct NotifyWatchFactory;

/// Live recursive watch; the `notify` watcher stops when this is dropped
pub struct NotifyReportWatch {
    _watcher: RecommendedWatcher,
    events: Receiver<PathBuf>,
}

impl ReportWatch for NotifyReportWatch {
    fn drain(&mut self) -> Vec<PathBuf> {
        self.events.try_iter().collect()
    }
}

impl WatchFactory for NotifyWatchFactory {
    fn watch(&self, glob: &str, root: &Path) -> Result<Box<dyn ReportWatch>> {
        let pattern = Pattern::new(glob)?;
        let root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
        let (tx, rx) = mpsc::channel::<PathBuf>();

        let filter_root = root.clone();
        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if !matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_)) {
                        return;
                    }
                    for path in event.paths {
                        if matches_report(&pattern, &filter_root, &path) {
                            // Receiver gone means the watch was disposed
                            let _ = tx.send(path);
                        }
                    }
                }
                Err(e) => tracing::warn!("Report watch error: {e}"),
            },
            WatcherConfig::default(),
        )?;
        watcher.watch(&root, RecursiveMode::Recursive)?;

        tracing::debug!("Watching {} for {glob}", root.display());
        Ok(Box::new(NotifyReportWatch {
            _watcher: watcher,
            events: rx,
        }))
    }
}

/// Match `path` against a glob written relative to `root`
pub fn matches_report(pattern: &Pattern, root: &Path, path: &Path) -> bool {
    path.strip_prefix(root)
        .map(|relative| pattern.matches_path_with(relative, MATCH_OPTIONS))
        .unwrap_or(false)
}
