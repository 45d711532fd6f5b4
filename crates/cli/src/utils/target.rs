use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use karate_runner_core::{
    parser::detail_for_line,
    types::{ExecutionMode, RunRequest, TargetKind, TestExecutionDetail},
};

/// Build a request for a feature file, a single section, or a folder.
///
/// A line narrows a feature file to the section under it; folders ignore it.
pub fn build_request(
    path: &Path,
    line: Option<u32>,
    tags: Option<&str>,
    mode: ExecutionMode,
) -> Result<RunRequest> {
    let ted = if path.is_dir() {
        TestExecutionDetail::for_target(path, TargetKind::Directory)
    } else {
        match line {
            Some(line) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                detail_for_line(path, &text, line)
            }
            None => TestExecutionDetail::for_target(path, TargetKind::File),
        }
    };

    let ted = match tags {
        Some(tags) => ted.with_tags(tags),
        None => ted,
    };

    Ok(RunRequest { ted, mode })
}
