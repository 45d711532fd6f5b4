use indexmap::IndexSet;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Where the coordinator is within one request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    Preparing,
    Running,
    Reconciling,
}

/// The feature and line a debug session should start on
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DebugTarget {
    pub feature_file: PathBuf,
    /// 0-based start line of the section, `None` for a whole file or folder
    pub line: Option<u32>,
    pub port: u16,
}

/// Mutable state shared across one run or debug cycle
#[derive(Debug, Default)]
pub struct ExecutionState {
    pub debug_feature_file: Option<PathBuf>,
    pub debug_line_number: Option<u32>,
    pub debug_port_number: Option<u16>,
    pub is_task_executing: bool,
    pub report_uris_found: IndexSet<PathBuf>,
}

impl ExecutionState {
    /// Forget everything a previous cycle left behind
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn set_debug_target(&mut self, feature_file: &Path, line: Option<u32>, port: u16) {
        self.debug_feature_file = Some(feature_file.to_path_buf());
        self.debug_line_number = line;
        self.debug_port_number = Some(port);
    }

    /// Consume the debug target. A second call returns `None` until the next
    /// debug request records a new one.
    pub fn take_debug_target(&mut self) -> Option<DebugTarget> {
        let feature_file = self.debug_feature_file.take()?;
        let line = self.debug_line_number.take();
        let port = self.debug_port_number?;
        Some(DebugTarget {
            feature_file,
            line,
            port,
        })
    }

    /// Returns false when the report was already recorded
    pub fn record_report(&mut self, path: PathBuf) -> bool {
        self.report_uris_found.insert(path)
    }

    /// Reports in first-seen order, leaving the set empty
    pub fn take_reports(&mut self) -> Vec<PathBuf> {
        self.report_uris_found.drain(..).collect()
    }
}
