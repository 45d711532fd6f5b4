use std::path::{Path, PathBuf};

use crate::{config::Config, error::Result, interfaces::ConfigStore};

/// Settings backed by a `.karate-runner.json` file.
///
/// Without a backing file, writes only update the in-memory snapshot.
#[derive(Debug, Clone, Default)]
pub struct JsonConfigStore {
    config: Config,
    path: Option<PathBuf>,
}

impl JsonConfigStore {
    pub fn new(config: Config, path: Option<PathBuf>) -> Self {
        Self { config, path }
    }

    pub fn in_memory(config: Config) -> Self {
        Self::new(config, None)
    }

    /// Load the config file nearest to `start_path`
    pub fn load_nearest(start_path: &Path) -> Result<Self> {
        let (config, path) = Config::load_nearest(start_path)?;
        Ok(Self::new(config, path))
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl ConfigStore for JsonConfigStore {
    fn config(&self) -> &Config {
        &self.config
    }

    fn set_runner_default(&mut self, runner_class: &str) -> Result<()> {
        self.config.karate_runner.default = Some(runner_class.to_string());
        if let Some(path) = &self.path {
            tracing::debug!("Saving runner default {runner_class} to {}", path.display());
            self.config.save_to_file(path)?;
        }
        Ok(())
    }
}
