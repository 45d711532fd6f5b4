use karate_runner_core::{BuildSystemKind, ProjectDetail, Section, SectionKind};

pub fn describe_build_system(project: &ProjectDetail) -> &'static str {
    match project.build_system() {
        BuildSystemKind::StandaloneJar => "Standalone jar",
        BuildSystemKind::NodePackage => "Node (npx karate)",
        BuildSystemKind::Maven => "Maven",
        BuildSystemKind::GradleKotlin => "Gradle (Kotlin DSL)",
        BuildSystemKind::GradleGroovy => "Gradle (Groovy DSL)",
        BuildSystemKind::Unresolved => "Unresolved",
    }
}

fn kind_label(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Scenario => "🧪 Scenario",
        SectionKind::ScenarioOutline => "📋 Scenario Outline",
        SectionKind::Feature => "📄 Feature",
    }
}

/// One block per section, with lines shown 1-based
pub fn print_sections(sections: &[Section]) {
    if sections.is_empty() {
        println!("ℹ️  No sections found");
        return;
    }

    for (index, section) in sections.iter().enumerate() {
        println!(
            "{}. {}: {}",
            index + 1,
            kind_label(section.kind),
            if section.title.is_empty() {
                "(untitled)"
            } else {
                section.title.as_str()
            }
        );
        println!(
            "   📏 Lines: {}-{}",
            section.start_line + 1,
            section.end_line + 1
        );
        if !section.tags.is_empty() {
            let tags: Vec<&str> = section.tags.iter().map(String::as_str).collect();
            println!("   🏷️  Tags: {}", tags.join(" "));
        }
    }
}
