use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::build_system::BuildSystemKind;

/// Where a target lives and which build descriptor drives it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDetail {
    pub project_root: PathBuf,
    /// Nearest build descriptor or standalone jar; empty when unresolved
    pub run_file: PathBuf,
}

impl ProjectDetail {
    pub fn new(project_root: impl Into<PathBuf>, run_file: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            run_file: run_file.into(),
        }
    }

    /// A detail with no build descriptor; downstream stages treat it as a no-op
    pub fn unresolved() -> Self {
        Self::default()
    }

    pub fn is_resolved(&self) -> bool {
        !self.run_file.as_os_str().is_empty()
    }

    pub fn build_system(&self) -> BuildSystemKind {
        BuildSystemKind::from_run_file(&self.run_file)
    }

    pub fn run_file(&self) -> &Path {
        &self.run_file
    }
}
