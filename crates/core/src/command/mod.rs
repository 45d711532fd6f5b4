//! Command synthesis for Maven, Gradle, npm and the standalone jar

pub mod run_command;
pub mod runner_class;
pub mod synthesizer;

// Re-export commonly used types
pub use run_command::RunCommand;
pub use runner_class::resolve_runner_class;
pub use synthesizer::{CommandSynthesizer, Platform};
