//! Default implementations of the collaborator interfaces
//!
//! These back the CLI. Editor integrations are expected to provide their own.

pub mod json_config_store;
pub mod notify_watch;
pub mod report_finder;
pub mod shell_task_executor;
pub mod std_file_system;
pub mod system_opener;
pub mod tcp_probe;

pub use json_config_store::JsonConfigStore;
pub use notify_watch::NotifyWatchFactory;
pub use report_finder::find_reports;
pub use shell_task_executor::ShellTaskExecutor;
pub use std_file_system::StdFileSystem;
pub use system_opener::SystemOpener;
pub use tcp_probe::TcpBindProbe;
