use serde::{Deserialize, Serialize};

use super::TestExecutionDetail;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    Run,
    Debug,
}

/// A test target together with how it should be executed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRequest {
    pub ted: TestExecutionDetail,
    pub mode: ExecutionMode,
}

impl RunRequest {
    pub fn run(ted: TestExecutionDetail) -> Self {
        Self {
            ted,
            mode: ExecutionMode::Run,
        }
    }

    pub fn debug(ted: TestExecutionDetail) -> Self {
        Self {
            ted,
            mode: ExecutionMode::Debug,
        }
    }
}
