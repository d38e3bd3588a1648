//! Batch orchestrator: drives discovery, per-job execution, and the summary.
//!
//! Jobs run strictly one at a time in discovery order; the next job does
//! not start until the previous process has terminated. Per-job failures
//! fold into `Skipped` outcomes at the job boundary, so the batch always
//! runs to completion once configuration has been validated.

use std::path::Path;

use crate::command;
use crate::config::BatchConfig;
use crate::discovery;
use crate::error::BatchResult;
use crate::models::{JobOutcome, SkipReason};
use crate::runner;
use crate::summary::RunSummary;
use crate::workspace::JobWorkspace;

/// Sequential driver for one batch run.
pub struct BatchOrchestrator {
    config: BatchConfig,
}

impl BatchOrchestrator {
    /// Create an orchestrator for the given resolved configuration.
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    /// Run the whole batch.
    ///
    /// Every discovered input yields exactly one recorded outcome; the
    /// summary is rendered and persisted at the root folder afterwards.
    /// Only configuration-tier problems (missing root, invalid
    /// parallelism, unwritable summary) return an error.
    pub fn run(&self) -> BatchResult<RunSummary> {
        self.config.validate()?;

        // Resolved once; the result holds for every job in this batch.
        let executable = runner::resolve_executable(self.config.executable.as_deref());
        match &executable {
            Some(path) => tracing::info!("Using xtb executable: {}", path.display()),
            None => tracing::warn!("No xtb executable found; all jobs will be skipped"),
        }

        let inputs = discovery::discover_inputs(&self.config.root, self.config.mode)?;

        let mut summary = RunSummary::new(self.config.mode);
        for (i, input) in inputs.iter().enumerate() {
            tracing::info!("Job {}/{}: {}", i + 1, inputs.len(), input.display());

            let outcome = self.process_input(executable.as_deref(), input);
            if let JobOutcome::Skipped(path, reason) = &outcome {
                tracing::warn!("Skipped {}: {}", path.display(), reason);
            }
            summary.record(outcome);
        }

        let report_path = summary.write_to(&self.config.root)?;
        tracing::info!(
            "Batch complete: {} succeeded, {} skipped; summary at {}",
            summary.successful().len(),
            summary.skipped().len(),
            report_path.display()
        );

        Ok(summary)
    }

    /// Process a single input.
    ///
    /// Infallible by construction: every error path folds into a
    /// `Skipped` outcome, so one job can never stop the batch.
    fn process_input(&self, executable: Option<&Path>, input: &Path) -> JobOutcome {
        let workspace = match JobWorkspace::prepare(input, self.config.mode) {
            Ok(workspace) => workspace,
            Err(e) => {
                return JobOutcome::Skipped(
                    input.to_path_buf(),
                    SkipReason::LaunchFailed(format!("workspace setup: {}", e)),
                );
            }
        };

        let args = command::build_args(self.config.mode, self.config.parallel, input);
        runner::run_job(executable, &args, input, &workspace)
    }
}
