//! Run and debug lifecycle for a single test target

pub mod coordinator;
pub mod listener;
pub mod state;

pub use coordinator::{Coordinator, DEFAULT_POLL_INTERVAL, RunOutcome, TASK_NAME};
pub use listener::CoordinatorListener;
pub use state::{DebugTarget, ExecutionState, Phase};
