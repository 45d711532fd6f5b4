use super::state::DebugTarget;
use crate::types::RunRequest;

/// Observer for coordinator events.
///
/// Every method has a no-op default so implementors only pick what they
/// display.
pub trait CoordinatorListener {
    fn busy_changed(&mut self, _busy: bool) {}

    fn history_appended(&mut self, _request: &RunRequest) {}

    /// A debug task is running; attach a debugger to `target.port` and start
    /// at `target.feature_file` / `target.line`. Called once per debug request.
    fn debug_session_ready(&mut self, _target: &DebugTarget) {}
}

impl CoordinatorListener for () {}
