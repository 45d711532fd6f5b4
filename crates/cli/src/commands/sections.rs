use anyhow::{Context, Result};
use std::fs;
use tracing::debug;

use karate_runner_core::parser::{parse, test_execution_details};

use super::absolute_target;
use crate::display::print_sections;
use crate::utils::parse_filepath_with_line;

pub fn sections_command(filepath_arg: &str, json: bool) -> Result<()> {
    let (filepath, line) = parse_filepath_with_line(filepath_arg);
    let filepath = absolute_target(&filepath)?;
    debug!("Listing sections of {} (line {:?})", filepath.display(), line);

    let text = fs::read_to_string(&filepath)
        .with_context(|| format!("Failed to read {}", filepath.display()))?;

    let (sections, details): (Vec<_>, Vec<_>) = parse(&text)
        .into_iter()
        .zip(test_execution_details(&filepath, &text))
        .filter(|(section, _)| line.is_none_or(|line| section.contains_line(line)))
        .unzip();

    if json {
        let output = serde_json::to_string_pretty(&details)
            .context("Failed to serialize execution details")?;
        println!("{output}");
    } else {
        println!("🔍 Sections in {}", filepath.display());
        println!("{}", "=".repeat(80));
        print_sections(&sections);
    }

    Ok(())
}
