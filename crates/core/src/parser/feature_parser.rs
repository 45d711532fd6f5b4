//! Line-oriented Gherkin scanner.
//!
//! Only the structure Karate needs for targeting is recognised: the `Feature:`
//! header, scenario keywords and `@tag` lines. Everything else is body text
//! that belongs to whichever section is open.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

use crate::types::{Section, SectionKind};

static SCENARIO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(Scenario Outline|Scenario Template|Scenario|Example):(.*)$")
        .expect("scenario pattern is valid")
});

static FEATURE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*Feature:(.*)$").expect("feature pattern is valid"));

struct OpenSection {
    start_line: u32,
    tags: BTreeSet<String>,
    title: String,
    kind: SectionKind,
}

/// Parse feature file text into ordered, non-overlapping sections.
///
/// Never fails: text without scenarios yields one section covering the file,
/// empty text yields none.
pub fn parse(text: &str) -> Vec<Section> {
    if text.is_empty() {
        return Vec::new();
    }

    let lines: Vec<&str> = text.lines().collect();
    let last_line = lines.len().saturating_sub(1) as u32;

    let mut pending_tags = BTreeSet::new();
    let mut file_tags = BTreeSet::new();
    let mut feature_title: Option<String> = None;
    let mut opened: Vec<OpenSection> = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if trimmed.starts_with('@') {
            pending_tags.extend(tags_in_line(trimmed));
            continue;
        }

        if let Some(caps) = SCENARIO_RE.captures(line) {
            let kind = match &caps[1] {
                "Scenario Outline" | "Scenario Template" => SectionKind::ScenarioOutline,
                _ => SectionKind::Scenario,
            };
            opened.push(OpenSection {
                start_line: index as u32,
                tags: std::mem::take(&mut pending_tags),
                title: caps[2].trim().to_string(),
                kind,
            });
            continue;
        }

        if feature_title.is_none() && opened.is_empty() {
            if let Some(caps) = FEATURE_RE.captures(line) {
                feature_title = Some(caps[1].trim().to_string());
                file_tags = std::mem::take(&mut pending_tags);
                continue;
            }
        }

        // Tags only bind to the keyword directly below them
        pending_tags.clear();
    }

    if opened.is_empty() {
        tracing::debug!("No scenario keywords found, using whole-file section");
        return vec![Section {
            start_line: 0,
            end_line: last_line,
            tags: file_tags,
            title: feature_title.unwrap_or_default(),
            kind: SectionKind::Feature,
        }];
    }

    let next_starts: Vec<Option<u32>> = opened
        .iter()
        .skip(1)
        .map(|s| Some(s.start_line))
        .chain(std::iter::once(None))
        .collect();

    opened
        .into_iter()
        .zip(next_starts)
        .map(|(open, next_start)| Section {
            start_line: open.start_line,
            end_line: next_start.map_or(last_line, |next| next - 1),
            tags: open.tags,
            title: open.title,
            kind: open.kind,
        })
        .collect()
}

/// Find the section containing a 0-based line
pub fn section_at_line(sections: &[Section], line: u32) -> Option<&Section> {
    sections.iter().find(|s| s.contains_line(line))
}

fn tags_in_line(line: &str) -> impl Iterator<Item = String> + '_ {
    line.split_whitespace()
        .take_while(|token| !token.starts_with('#'))
        .filter(|token| token.starts_with('@') && token.len() > 1)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const USERS_FEATURE: &str = "@users
Feature: user management

Background:
  * url baseUrl

@smoke
Scenario: get user
  Given path 'users', 1
  When method get
  Then status 200

@regression @slow
# flaky on CI
Scenario Outline: create <name>
  Given path 'users'
  And request { name: '<name>' }
  When method post
  Then status 201

  Examples:
    | name  |
    | alice |
";

    fn tags(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_empty_text_yields_no_sections() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_sections_follow_scenario_keywords() {
        let sections = parse(USERS_FEATURE);
        assert_eq!(sections.len(), 2);

        assert_eq!(sections[0].start_line, 7);
        assert_eq!(sections[0].end_line, 13);
        assert_eq!(sections[0].title, "get user");
        assert_eq!(sections[0].kind, SectionKind::Scenario);
        assert_eq!(sections[0].tags, tags(&["@smoke"]));

        assert_eq!(sections[1].start_line, 14);
        assert_eq!(sections[1].end_line, 22);
        assert_eq!(sections[1].title, "create <name>");
        assert_eq!(sections[1].kind, SectionKind::ScenarioOutline);
        assert_eq!(sections[1].tags, tags(&["@regression", "@slow"]));
    }

    #[test]
    fn test_sections_are_contiguous() {
        let sections = parse(USERS_FEATURE);
        for pair in sections.windows(2) {
            assert_eq!(pair[0].end_line + 1, pair[1].start_line);
        }
    }

    #[test]
    fn test_feature_tags_are_not_inherited() {
        let sections = parse(USERS_FEATURE);
        assert!(sections.iter().all(|s| !s.has_tag("@users")));
    }

    #[test]
    fn test_keyword_free_text_is_one_section() {
        let text = "@wip\nFeature: nothing yet\n\n  Background:\n    * def a = 1\n";
        let sections = parse(text);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].start_line, 0);
        assert_eq!(sections[0].end_line, 4);
        assert_eq!(sections[0].kind, SectionKind::Feature);
        assert_eq!(sections[0].title, "nothing yet");
        assert_eq!(sections[0].tags, tags(&["@wip"]));
    }

    #[test]
    fn test_garbage_degrades_to_whole_file() {
        let sections = parse("not gherkin at all\n@@@\n");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].end_line, 1);
        assert!(sections[0].title.is_empty());
    }

    #[test]
    fn test_tags_separated_by_body_text_are_dropped() {
        let text = "Feature: f\n@orphan\n  * print 'x'\nScenario: s\n  * print 'y'\n";
        let sections = parse(text);
        assert_eq!(sections.len(), 1);
        assert!(sections[0].tags.is_empty());
    }

    #[test]
    fn test_examples_keyword_does_not_open_section() {
        let text =
            "Feature: f\nScenario Outline: o\n  * print '<a>'\nExamples:\n  | a |\n  | 1 |\n";
        let sections = parse(text);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].end_line, 5);
    }

    #[test]
    fn test_example_synonym_and_inline_comment_on_tag_line() {
        let text = "Feature: f\n@fast # quick one\nExample: synonym\n  * print 1\n";
        let sections = parse(text);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].start_line, 2);
        assert_eq!(sections[0].tags, tags(&["@fast"]));
    }

    #[test]
    fn test_parse_is_deterministic() {
        assert_eq!(parse(USERS_FEATURE), parse(USERS_FEATURE));
    }

    #[test]
    fn test_section_at_line() {
        let sections = parse(USERS_FEATURE);
        assert_eq!(section_at_line(&sections, 9).map(|s| s.start_line), Some(7));
        assert_eq!(section_at_line(&sections, 20).map(|s| s.start_line), Some(14));
        assert!(section_at_line(&sections, 2).is_none());
    }
}
