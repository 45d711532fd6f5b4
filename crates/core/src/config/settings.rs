use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{
    BuildDirectoryConfig, BuildReportsConfig, BuildToolConfig, CoreConfig, DebuggerConfig,
    KarateCliConfig, KarateJarConfig, KarateRunnerConfig, NodeConfig,
};

/// File names searched for, in order, in every ancestor directory
pub const CONFIG_FILE_NAMES: &[&str] = &[".karate-runner.json", "karate-runner.json"];

/// Read-only snapshot of every setting the runner consults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct Config {
    pub core: CoreConfig,
    pub karate_runner: KarateRunnerConfig,
    pub build_directory: BuildDirectoryConfig,
    pub karate_jar: KarateJarConfig,
    pub node: NodeConfig,
    pub karate_cli: KarateCliConfig,
    pub maven: BuildToolConfig,
    pub gradle: BuildToolConfig,
    pub build_reports: BuildReportsConfig,
    pub debugger: DebuggerConfig,
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = if start_path.is_file() {
            start_path.parent()?
        } else {
            start_path
        };

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    /// Load the nearest config file above `start_path`, or defaults when none exists.
    ///
    /// Returns the file the settings came from so callers can write back to it.
    pub fn load_nearest(start_path: &Path) -> Result<(Self, Option<PathBuf>)> {
        match Self::find_config_file(start_path) {
            Some(path) => {
                tracing::debug!("Loading config from {}", path.display());
                let config = Self::load_from_file(&path)?;
                Ok((config, Some(path)))
            }
            None => {
                tracing::debug!("No config file above {}, using defaults", start_path.display());
                Ok((Self::default(), None))
            }
        }
    }
}
