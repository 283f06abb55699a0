//! FFmpeg execution adapter
//!
//! Runs a [`RenderPlan`] through the `ffmpeg` binary as a child process.

use std::process::Stdio;
use std::time::Instant;

use async_trait::async_trait;
use chrono::Utc;
use tokio::process::Command;
use tracing::{error, info};

use crate::domain::errors::DomainError;
use crate::planner::RenderPlan;
use crate::ports::{ExecutePort, ExecutionReport};

/// FFmpeg-based execution adapter
pub struct FfmpegAdapter {
    program: String,
}

impl FfmpegAdapter {
    /// Create new FFmpeg adapter invoking `program`
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for FfmpegAdapter {
    fn default() -> Self {
        Self::new("ffmpeg")
    }
}

#[async_trait]
impl ExecutePort for FfmpegAdapter {
    async fn execute(&self, plan: &RenderPlan) -> Result<ExecutionReport, DomainError> {
        info!(
            program = %self.program,
            input = %plan.input_path.display(),
            output = %plan.output_path.display(),
            segments = plan.segments.len(),
            "Launching transcoder"
        );
        let started = Instant::now();

        let output = Command::new(&self.program)
            .args(&plan.args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                error!("Failed to launch {}: {}", self.program, e);
                DomainError::Execution(format!("failed to launch {}: {}", self.program, e))
            })?;

        if !output.status.success() {
            error!(status = ?output.status.code(), "Transcoder exited unsuccessfully");
            return Err(DomainError::Execution(
                String::from_utf8_lossy(&output.stderr).to_string(),
            ));
        }

        let elapsed = started.elapsed();
        info!("Transcoder finished in {:.2}s", elapsed.as_secs_f64());

        Ok(ExecutionReport {
            output_path: plan.output_path.clone(),
            elapsed,
            finished_at: Utc::now(),
        })
    }
}
