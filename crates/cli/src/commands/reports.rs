use anyhow::{Context, Result};
use std::path::Path;

use karate_runner_core::{
    build_system,
    interfaces::{ConfigStore, ReportOpener},
    services::{JsonConfigStore, SystemOpener, find_reports},
    types::TargetKind,
};

use super::absolute_target;

pub fn reports_command(path: &str, open: bool) -> Result<()> {
    let target = absolute_target(Path::new(path))?;
    let kind = if target.is_dir() {
        TargetKind::Directory
    } else {
        TargetKind::File
    };

    let project = build_system::resolve(&target, kind);
    if !project.is_resolved() {
        println!("❌ No build descriptor found above {}", target.display());
        return Ok(());
    }

    let store = JsonConfigStore::load_nearest(&target).context("Failed to load configuration")?;
    let glob = &store.config().build_reports.to_target;
    let reports = find_reports(glob, &project.project_root)
        .with_context(|| format!("Failed to search {}", project.project_root.display()))?;

    if reports.is_empty() {
        println!("   • No reports matching {glob} under {}", project.project_root.display());
        return Ok(());
    }

    println!("📊 Reports under {}:", project.project_root.display());
    for report in &reports {
        println!("   {}", report.display());
    }

    if open {
        let opener = SystemOpener::new();
        for report in &reports {
            opener
                .open_external(report)
                .with_context(|| format!("Failed to open {}", report.display()))?;
        }
    }

    Ok(())
}
