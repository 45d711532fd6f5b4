use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::{error::Result, interfaces::ReportOpener};

/// Opens files with the desktop's default handler
#[derive(Debug, Clone, Default)]
pub struct SystemOpener {
    /// Replaces the platform handler, e.g. a browser binary
    program: Option<String>,
}

impl SystemOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: Some(program.into()),
        }
    }

    fn open_command(&self) -> Command {
        if let Some(program) = &self.program {
            return Command::new(program);
        }

        if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", ""]);
            cmd
        } else if cfg!(target_os = "macos") {
            Command::new("open")
        } else {
            Command::new("xdg-open")
        }
    }
}

impl ReportOpener for SystemOpener {
    /// Waits for the handler to hand off, so no child outlives the call
    fn open_external(&self, path: &Path) -> Result<()> {
        tracing::info!("Opening report {}", path.display());
        let status = self
            .open_command()
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;

        if !status.success() {
            return Err(io::Error::other(format!(
                "opener exited with {status} for {}",
                path.display()
            ))
            .into());
        }
        Ok(())
    }
}
