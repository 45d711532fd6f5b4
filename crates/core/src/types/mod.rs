pub mod project;
pub mod request;
pub mod section;
pub mod test_detail;

// Re-export commonly used types
pub use project::ProjectDetail;
pub use request::{ExecutionMode, RunRequest};
pub use section::{Section, SectionKind};
pub use test_detail::{TargetKind, TestExecutionDetail};
