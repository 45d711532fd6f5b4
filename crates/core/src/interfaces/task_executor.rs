//! Task execution interface

use crate::{command::RunCommand, error::Result};

/// Identity of a task started through a [`TaskExecutor`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskHandle {
    pub id: u64,
    pub name: String,
}

/// Runs shell command lines and reports when they end.
///
/// Exit status is deliberately not part of the contract; callers only learn
/// that a task ended.
pub trait TaskExecutor {
    fn execute(&mut self, name: &str, command: &RunCommand) -> Result<TaskHandle>;

    /// Tasks that ended since the last call, including ones this caller did not start
    fn poll_ended(&mut self) -> Vec<TaskHandle>;
}
