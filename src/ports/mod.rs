// Ports - Interface definitions (contracts)

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::errors::DomainError;
use crate::planner::RenderPlan;

/// Port for running a render plan through the external transcoder.
///
/// Implementations yield exactly one terminal result per call. Dropping the
/// returned future must abandon the run; for a subprocess that means killing it.
#[async_trait]
pub trait ExecutePort: Send + Sync {
    /// Execute the plan; failures come back as [`DomainError::Execution`]
    async fn execute(&self, plan: &RenderPlan) -> Result<ExecutionReport, DomainError>;
}

/// Summary of a successful transcoder run
#[derive(Debug, Clone, Serialize)]
pub struct ExecutionReport {
    pub output_path: PathBuf,
    pub elapsed: Duration,
    pub finished_at: DateTime<Utc>,
}
