use anyhow::{Context, Result};
use serde_json::json;
use std::path::Path;

use karate_runner_core::{build_system, types::TargetKind};

use super::absolute_target;
use crate::display::describe_build_system;

pub fn resolve_command(path: &str, json: bool) -> Result<()> {
    let target = absolute_target(Path::new(path))?;
    let kind = if target.is_dir() {
        TargetKind::Directory
    } else {
        TargetKind::File
    };

    let project = build_system::resolve(&target, kind);

    if json {
        let output = json!({
            "project_root": project.project_root,
            "run_file": project.run_file,
            "build_system": project.build_system(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context("Failed to serialize project")?
        );
        return Ok(());
    }

    if !project.is_resolved() {
        println!("❌ No build descriptor found above {}", target.display());
        return Ok(());
    }

    println!("📦 Build system: {}", describe_build_system(&project));
    println!("📍 Project root: {}", project.project_root.display());
    println!("📄 Run file: {}", project.run_file.display());
    Ok(())
}
