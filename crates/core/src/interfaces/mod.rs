//! Seams to the collaborators that live outside the core
//!
//! The editor, task runner, file watcher and settings store are all external
//! to the run engine. Each one is a trait here, with a default
//! implementation in [`crate::services`].

pub mod config_store;
pub mod file_system;
pub mod port_probe;
pub mod report_watch;
pub mod task_executor;
pub mod user;

pub use config_store::ConfigStore;
pub use file_system::FileSystem;
pub use port_probe::PortProbe;
pub use report_watch::{ReportWatch, WatchFactory};
pub use task_executor::{TaskExecutor, TaskHandle};
pub use user::{AcceptDefault, ReportOpener, RunnerPrompt};
