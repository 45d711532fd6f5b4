use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// What opened a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Scenario,
    ScenarioOutline,
    /// The whole file, used when no scenario keyword is present
    Feature,
}

/// A contiguous line range in one feature file representing one test unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// 0-based, inclusive
    pub start_line: u32,
    /// 0-based, inclusive
    pub end_line: u32,
    pub tags: BTreeSet<String>,
    pub title: String,
    pub kind: SectionKind,
}

impl Section {
    /// Check if a line number is within this section
    pub fn contains_line(&self, line: u32) -> bool {
        line >= self.start_line && line <= self.end_line
    }

    pub fn line_count(&self) -> u32 {
        self.end_line - self.start_line + 1
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_line_is_inclusive() {
        let section = Section {
            start_line: 3,
            end_line: 7,
            tags: BTreeSet::new(),
            title: "login".to_string(),
            kind: SectionKind::Scenario,
        };

        assert!(!section.contains_line(2));
        assert!(section.contains_line(3));
        assert!(section.contains_line(7));
        assert!(!section.contains_line(8));
        assert_eq!(section.line_count(), 5);
    }
}
