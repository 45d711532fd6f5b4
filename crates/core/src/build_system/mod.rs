//! Build descriptor detection and project resolution

pub mod resolver;

pub use resolver::{ProjectResolver, resolve};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::interfaces::FileSystem;

pub const STANDALONE_JAR: &str = "karate.jar";
pub const NODE_PACKAGE: &str = "package.json";
pub const MAVEN_BUILD_FILE: &str = "pom.xml";
pub const GRADLE_KOTLIN_BUILD_FILE: &str = "build.gradle.kts";
pub const GRADLE_GROOVY_BUILD_FILE: &str = "build.gradle";

/// Markers in tie-break order: the first one present in a directory wins
pub const MARKERS: &[&str] = &[
    STANDALONE_JAR,
    NODE_PACKAGE,
    MAVEN_BUILD_FILE,
    GRADLE_KOTLIN_BUILD_FILE,
    GRADLE_GROOVY_BUILD_FILE,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildSystemKind {
    Maven,
    GradleGroovy,
    GradleKotlin,
    NodePackage,
    StandaloneJar,
    Unresolved,
}

impl BuildSystemKind {
    /// Classify a run file by its file name alone
    pub fn from_run_file(run_file: &Path) -> Self {
        let Some(name) = run_file.file_name().and_then(|n| n.to_str()) else {
            return BuildSystemKind::Unresolved;
        };
        let name = name.to_ascii_lowercase();

        if name.ends_with(STANDALONE_JAR) {
            BuildSystemKind::StandaloneJar
        } else if name == NODE_PACKAGE {
            BuildSystemKind::NodePackage
        } else if name == MAVEN_BUILD_FILE {
            BuildSystemKind::Maven
        } else if name == GRADLE_KOTLIN_BUILD_FILE {
            BuildSystemKind::GradleKotlin
        } else if name == GRADLE_GROOVY_BUILD_FILE {
            BuildSystemKind::GradleGroovy
        } else {
            BuildSystemKind::Unresolved
        }
    }

    pub fn is_gradle(self) -> bool {
        matches!(self, BuildSystemKind::GradleGroovy | BuildSystemKind::GradleKotlin)
    }

    /// Maven and Gradle go through a JUnit runner class
    pub fn uses_runner_class(self) -> bool {
        self == BuildSystemKind::Maven || self.is_gradle()
    }
}

pub trait BuildSystemDetector {
    /// Highest-priority marker file directly inside `dir`
    fn detect(&self, dir: &Path) -> Option<PathBuf>;
}

impl<F: FileSystem + ?Sized> BuildSystemDetector for F {
    fn detect(&self, dir: &Path) -> Option<PathBuf> {
        MARKERS
            .iter()
            .map(|marker| dir.join(marker))
            .find(|candidate| self.is_file(candidate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::StdFileSystem;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_kind_from_run_file() {
        let cases = [
            ("/p/pom.xml", BuildSystemKind::Maven),
            ("/p/build.gradle", BuildSystemKind::GradleGroovy),
            ("/p/build.gradle.kts", BuildSystemKind::GradleKotlin),
            ("/p/package.json", BuildSystemKind::NodePackage),
            ("/p/karate.jar", BuildSystemKind::StandaloneJar),
            ("/p/POM.XML", BuildSystemKind::Maven),
            ("/p/settings.gradle", BuildSystemKind::Unresolved),
            ("", BuildSystemKind::Unresolved),
        ];

        for (path, expected) in cases {
            assert_eq!(
                BuildSystemKind::from_run_file(Path::new(path)),
                expected,
                "for {path}"
            );
        }
    }

    #[test]
    fn test_detect_maven_project() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("pom.xml"), "<project/>").unwrap();

        let marker = StdFileSystem.detect(temp_dir.path());
        assert_eq!(marker, Some(temp_dir.path().join("pom.xml")));
    }

    #[test]
    fn test_prefer_node_over_gradle() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("build.gradle"), "").unwrap();
        fs::write(temp_dir.path().join("package.json"), "{}").unwrap();

        let marker = StdFileSystem.detect(temp_dir.path());
        assert_eq!(marker, Some(temp_dir.path().join("package.json")));
    }

    #[test]
    fn test_prefer_kotlin_dsl_over_groovy() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("build.gradle"), "").unwrap();
        fs::write(temp_dir.path().join("build.gradle.kts"), "").unwrap();

        let marker = StdFileSystem.detect(temp_dir.path());
        assert_eq!(marker, Some(temp_dir.path().join("build.gradle.kts")));
    }

    #[test]
    fn test_no_build_system() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(StdFileSystem.detect(temp_dir.path()), None);
    }

    #[test]
    fn test_directory_named_like_marker_is_ignored() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("pom.xml")).unwrap();
        assert_eq!(StdFileSystem.detect(temp_dir.path()), None);
    }
}
