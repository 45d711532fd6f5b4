//! Configuration management for karate-runner

mod sections;
mod settings;
pub mod validation;

// Re-export main types
pub use sections::{
    BuildDirectoryConfig, BuildReportsConfig, BuildToolConfig, CoreConfig, DebuggerConfig,
    KarateCliConfig, KarateJarConfig, KarateRunnerConfig, NodeConfig,
};
pub use settings::{CONFIG_FILE_NAMES, Config};
pub use validation::validate;
