//! Interactive collaborators

use std::path::Path;

use crate::error::Result;

/// Asks the user for a line of text
pub trait RunnerPrompt {
    /// `None` when the user cancelled
    fn prompt_text(&mut self, title: &str, default: &str) -> Option<String>;
}

/// Opens a report with whatever the platform associates with it
pub trait ReportOpener {
    fn open_external(&self, path: &Path) -> Result<()>;
}

/// Answers every prompt with its default, for non-interactive use
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptDefault;

impl RunnerPrompt for AcceptDefault {
    fn prompt_text(&mut self, _title: &str, default: &str) -> Option<String> {
        Some(default.to_string())
    }
}
