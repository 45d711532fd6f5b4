use crate::{config::Config, error::Result};

/// Read/write access to persisted settings
pub trait ConfigStore {
    fn config(&self) -> &Config;

    /// Remember a runner class as the new default
    fn set_runner_default(&mut self, runner_class: &str) -> Result<()>;
}
