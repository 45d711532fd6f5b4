//! Turn parsed sections into execution details for display and running

use std::path::Path;

use super::feature_parser::{parse, section_at_line};
use crate::types::{SectionKind, TargetKind, TestExecutionDetail};

/// One detail per section of a feature file, in section order.
///
/// A keyword-free file produces a single whole-file detail anchored at its
/// first line.
pub fn test_execution_details(feature_path: &Path, text: &str) -> Vec<TestExecutionDetail> {
    parse(text)
        .iter()
        .map(|section| match section.kind {
            SectionKind::Feature => {
                let mut ted = TestExecutionDetail::for_target(feature_path, TargetKind::File);
                ted.section_line = Some(section.start_line);
                ted
            }
            _ => TestExecutionDetail::for_section(feature_path, section),
        })
        .collect()
}

/// Detail for the section under a 0-based line, falling back to the whole file
/// when the line sits outside every scenario (e.g. on the `Feature:` header).
pub fn detail_for_line(feature_path: &Path, text: &str, line: u32) -> TestExecutionDetail {
    let sections = parse(text);
    match section_at_line(&sections, line) {
        Some(section) if section.kind != SectionKind::Feature => {
            TestExecutionDetail::for_section(feature_path, section)
        }
        _ => TestExecutionDetail::for_target(feature_path, TargetKind::File),
    }
}
