use std::io;
use std::path::PathBuf;

/// Errors that can occur during karate-runner operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No build descriptor was found, or no runner class was chosen.
    #[error("Unresolved: {0}")]
    Unresolved(String),

    /// A required configuration key is undefined or empty.
    #[error("Configuration missing: {0}")]
    ConfigurationMissing(String),

    #[error("No free port in range {start}-{end}")]
    ResourceExhausted { start: u16, end: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Watch error: {0}")]
    WatchError(#[from] notify::Error),

    #[error("Invalid report glob: {0}")]
    PatternError(#[from] glob::PatternError),

    #[error("Failed to launch task for {path}: {source}")]
    TaskLaunch {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Aborts that mean "nothing to run yet" rather than a fault.
    ///
    /// The coordinator swallows these and returns to idle without surfacing
    /// anything to the user.
    pub fn is_silent_abort(&self) -> bool {
        matches!(self, Error::Unresolved(_) | Error::ConfigurationMissing(_))
    }
}

/// Result type alias for karate-runner operations
pub type Result<T> = std::result::Result<T, Error>;
