use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

use super::Section;

/// Source roots whose contents Karate can address with `classpath:`
const CLASSPATH_ROOTS: &[&[&str]] = &[&["src", "test", "java"], &["src", "test", "resources"]];

const RUN_TITLE: &str = "Karate: Run";
const DEBUG_TITLE: &str = "Karate: Debug";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    File,
    Directory,
    /// A single section inside a feature file
    Test,
}

/// The resolved, ready-to-run description of one test target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestExecutionDetail {
    /// JVM-style options, e.g. `--tags @smoke classpath:users/get.feature`
    pub karate_options: String,
    /// Standalone jar options, e.g. `-t @smoke "/abs/users/get.feature"`
    pub karate_jar_options: String,
    pub target_path: PathBuf,
    pub target_kind: TargetKind,
    /// Start line of the section this detail targets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_line: Option<u32>,
    pub codelens_run_title: String,
    pub codelens_debug_title: String,
}

impl TestExecutionDetail {
    /// Aggregate detail for a whole feature file or a directory of features
    pub fn for_target(target_path: impl Into<PathBuf>, target_kind: TargetKind) -> Self {
        let target_path = target_path.into();
        Self {
            karate_options: karate_path_option(&target_path),
            karate_jar_options: format!("\"{}\"", target_path.display()),
            target_path,
            target_kind,
            section_line: None,
            codelens_run_title: RUN_TITLE.to_string(),
            codelens_debug_title: DEBUG_TITLE.to_string(),
        }
    }

    /// Detail addressing one section of a feature file by its 1-based line
    pub fn for_section(feature_path: impl Into<PathBuf>, section: &Section) -> Self {
        let feature_path = feature_path.into();
        let line = section.start_line + 1;
        let (run_title, debug_title) = if section.tags.is_empty() {
            (RUN_TITLE.to_string(), DEBUG_TITLE.to_string())
        } else {
            let tags = section.tags.iter().cloned().collect::<Vec<_>>().join(" ");
            (
                format!("{RUN_TITLE} [{tags}]"),
                format!("{DEBUG_TITLE} [{tags}]"),
            )
        };

        Self {
            karate_options: format!("{}:{line}", karate_path_option(&feature_path)),
            karate_jar_options: format!("\"{}:{line}\"", feature_path.display()),
            target_path: feature_path,
            target_kind: TargetKind::Test,
            section_line: Some(section.start_line),
            codelens_run_title: run_title,
            codelens_debug_title: debug_title,
        }
    }

    /// Restrict the run to a tag expression.
    ///
    /// The tag switch goes in front of whatever options are already present.
    pub fn with_tags(mut self, tags: &str) -> Self {
        let tags = tags.trim();
        if tags.is_empty() {
            return self;
        }
        self.karate_options = prefix_option(&format!("--tags {tags}"), &self.karate_options);
        self.karate_jar_options = prefix_option(&format!("-t {tags}"), &self.karate_jar_options);
        self
    }
}

fn prefix_option(switch: &str, existing: &str) -> String {
    if existing.is_empty() {
        switch.to_string()
    } else {
        format!("{switch} {existing}")
    }
}

/// `classpath:` form when the target sits under a test source root,
/// otherwise the path itself.
pub fn karate_path_option(target: &Path) -> String {
    match classpath_relative(target) {
        Some(relative) if !relative.is_empty() => format!("classpath:{relative}"),
        Some(_) => "classpath:".to_string(),
        None => target.display().to_string(),
    }
}

fn classpath_relative(target: &Path) -> Option<String> {
    let parts: Vec<String> = target
        .components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy().to_string()),
            _ => None,
        })
        .collect();

    for root in CLASSPATH_ROOTS {
        // Last match wins so nested modules resolve to their own source root
        let found = (0..parts.len().saturating_sub(root.len() - 1))
            .rev()
            .find(|&i| parts[i..i + root.len()].iter().zip(root.iter()).all(|(a, b)| a == b));
        if let Some(index) = found {
            return Some(parts[index + root.len()..].join("/"));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SectionKind;
    use std::collections::BTreeSet;

    fn section(start: u32, tags: &[&str]) -> Section {
        Section {
            start_line: start,
            end_line: start + 4,
            tags: tags.iter().map(|t| t.to_string()).collect::<BTreeSet<_>>(),
            title: "get user".to_string(),
            kind: SectionKind::Scenario,
        }
    }

    #[test]
    fn test_classpath_option_for_test_sources() {
        let path = PathBuf::from("/work/api/src/test/java/users/get.feature");
        assert_eq!(karate_path_option(&path), "classpath:users/get.feature");

        let path = PathBuf::from("/work/api/src/test/resources/users");
        assert_eq!(karate_path_option(&path), "classpath:users");
    }

    #[test]
    fn test_plain_path_outside_test_sources() {
        let path = PathBuf::from("/work/standalone/users/get.feature");
        assert_eq!(karate_path_option(&path), "/work/standalone/users/get.feature");
    }

    #[test]
    fn test_section_detail_uses_one_based_line() {
        let path = PathBuf::from("/work/api/src/test/java/users/get.feature");
        let ted = TestExecutionDetail::for_section(&path, &section(9, &[]));

        assert_eq!(ted.karate_options, "classpath:users/get.feature:10");
        assert_eq!(
            ted.karate_jar_options,
            "\"/work/api/src/test/java/users/get.feature:10\""
        );
        assert_eq!(ted.section_line, Some(9));
        assert_eq!(ted.target_kind, TargetKind::Test);
        assert_eq!(ted.codelens_run_title, "Karate: Run");
    }

    #[test]
    fn test_section_titles_mention_tags() {
        let path = PathBuf::from("/work/get.feature");
        let ted = TestExecutionDetail::for_section(&path, &section(0, &["@smoke", "@fast"]));

        assert_eq!(ted.codelens_run_title, "Karate: Run [@fast @smoke]");
        assert_eq!(ted.codelens_debug_title, "Karate: Debug [@fast @smoke]");
    }

    #[test]
    fn test_tag_filter_prefixes_both_forms() {
        let ted =
            TestExecutionDetail::for_target("/work/src/test/java/users", TargetKind::Directory)
                .with_tags("@smoke");

        assert_eq!(ted.karate_options, "--tags @smoke classpath:users");
        assert_eq!(ted.karate_jar_options, "-t @smoke \"/work/src/test/java/users\"");
        assert!(ted.section_line.is_none());
    }

    #[test]
    fn test_blank_tag_filter_is_ignored() {
        let ted =
            TestExecutionDetail::for_target("/work/a.feature", TargetKind::File).with_tags("  ");
        assert_eq!(ted.karate_options, "/work/a.feature");
    }
}
