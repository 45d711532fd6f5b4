//! Runs command lines through the platform shell

use std::process::{Child, Command};

use crate::{
    command::RunCommand,
    error::{Error, Result},
    interfaces::{TaskExecutor, TaskHandle},
};

/// Spawns each task as a child shell with inherited stdio
#[derive(Debug, Default)]
pub struct ShellTaskExecutor {
    next_id: u64,
    running: Vec<(TaskHandle, Child)>,
}

impl ShellTaskExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    fn shell_command(command_line: &str) -> Command {
        if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", command_line]);
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.args(["-c", command_line]);
            cmd
        }
    }
}

impl TaskExecutor for ShellTaskExecutor {
    fn execute(&mut self, name: &str, command: &RunCommand) -> Result<TaskHandle> {
        let mut shell = Self::shell_command(&command.command_line);
        shell.current_dir(&command.working_directory);

        tracing::info!("Running: {}", command.command_line);
        tracing::info!("Working directory: {}", command.working_directory.display());

        let child = shell.spawn().map_err(|source| Error::TaskLaunch {
            path: command.working_directory.clone(),
            source,
        })?;

        self.next_id += 1;
        let handle = TaskHandle {
            id: self.next_id,
            name: name.to_string(),
        };
        self.running.push((handle.clone(), child));
        Ok(handle)
    }

    fn poll_ended(&mut self) -> Vec<TaskHandle> {
        let mut ended = Vec::new();
        self.running.retain_mut(|(handle, child)| match child.try_wait() {
            Ok(Some(status)) => {
                tracing::debug!("Task {} ({}) ended with {status}", handle.name, handle.id);
                ended.push(handle.clone());
                false
            }
            Ok(None) => true,
            Err(e) => {
                tracing::warn!("Lost track of task {} ({}): {e}", handle.name, handle.id);
                ended.push(handle.clone());
                false
            }
        });
        ended
    }
}
