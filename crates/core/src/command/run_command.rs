use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A fully substituted, shell-ready command line and where to run it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunCommand {
    pub command_line: String,
    pub working_directory: PathBuf,
}

impl RunCommand {
    pub fn new(command_line: impl Into<String>, working_directory: impl Into<PathBuf>) -> Self {
        Self {
            command_line: command_line.into(),
            working_directory: working_directory.into(),
        }
    }

    pub fn to_shell_command(&self) -> &str {
        &self.command_line
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_directory
    }
}

/// Join command segments with single spaces, skipping blank ones
pub(crate) fn join_segments<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(|s| s.as_ref().trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
