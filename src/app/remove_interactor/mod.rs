// Remove interactor - Orchestrates the chunk removal use case

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::errors::DomainError;
use crate::domain::rules::IntervalPolicy;
use crate::domain::store::IntervalStore;
use crate::planner::{RenderPlan, SegmentGraphBuilder};
use crate::ports::{ExecutePort, ExecutionReport};

/// Terminal result of a processing request
#[derive(Debug, Clone)]
pub enum ProcessOutcome {
    /// Transcoder produced the output
    Completed {
        output_path: PathBuf,
        report: ExecutionReport,
    },
    /// Request rejected before anything ran
    Rejected(DomainError),
    /// Transcoder failed; diagnostic is passed through untouched
    Failed { diagnostic: String },
}

impl ProcessOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ProcessOutcome::Completed { .. })
    }
}

/// Interactor for removing chunks from an asset
pub struct RemoveInteractor {
    builder: SegmentGraphBuilder,
    execute_port: Arc<dyn ExecutePort>,
}

impl RemoveInteractor {
    /// Create new remove interactor with injected ports
    pub fn new(builder: SegmentGraphBuilder, execute_port: Arc<dyn ExecutePort>) -> Self {
        Self {
            builder,
            execute_port,
        }
    }

    /// Snapshot the store and build the render plan.
    ///
    /// Refuses an empty store; the builder itself would happily produce a
    /// pass-through copy.
    pub fn plan(
        &self,
        input: &Path,
        output: &Path,
        store: &IntervalStore,
    ) -> Result<RenderPlan, DomainError> {
        let intervals = store.snapshot();
        IntervalPolicy::require_intervals(&intervals)?;
        Ok(self.builder.build(input, output, &intervals))
    }

    /// Plan and execute, folding every result into a [`ProcessOutcome`]
    pub async fn process(
        &self,
        input: &Path,
        output: &Path,
        store: &IntervalStore,
    ) -> ProcessOutcome {
        let plan = match self.plan(input, output, store) {
            Ok(plan) => plan,
            Err(e) => {
                warn!("Processing rejected: {}", e);
                return ProcessOutcome::Rejected(e);
            }
        };

        info!(
            "Removing {} chunk(s) from {}, keeping {} segment(s)",
            store.len(),
            input.display(),
            plan.segments.len()
        );

        match self.execute_port.execute(&plan).await {
            Ok(report) => ProcessOutcome::Completed {
                output_path: plan.output_path,
                report,
            },
            Err(DomainError::Execution(diagnostic)) => ProcessOutcome::Failed { diagnostic },
            Err(other) => ProcessOutcome::Rejected(other),
        }
    }
}
