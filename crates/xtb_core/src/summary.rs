//! Batch summary: accumulates per-job outcomes and renders the report.
//!
//! The summary is append-only during the run and rendered once at the
//! end. The report file at the root folder is overwritten on every run,
//! not appended across runs.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::{BatchError, BatchResult};
use crate::models::{JobOutcome, RunMode, SkipReason};

/// Name of the report written at the root folder.
pub const SUMMARY_FILE_NAME: &str = "xtb_summary_log.txt";

/// Ordered record of a batch.
#[derive(Debug)]
pub struct RunSummary {
    mode: RunMode,
    successful: Vec<PathBuf>,
    skipped: Vec<(PathBuf, SkipReason)>,
}

impl RunSummary {
    /// Create an empty summary for the given run mode.
    pub fn new(mode: RunMode) -> Self {
        Self {
            mode,
            successful: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Record one job outcome, preserving processing order.
    pub fn record(&mut self, outcome: JobOutcome) {
        match outcome {
            JobOutcome::Succeeded(input) => self.successful.push(input),
            JobOutcome::Skipped(input, reason) => self.skipped.push((input, reason)),
        }
    }

    /// Inputs that ran to success, in processing order.
    pub fn successful(&self) -> &[PathBuf] {
        &self.successful
    }

    /// Inputs that were skipped, with reasons, in processing order.
    pub fn skipped(&self) -> &[(PathBuf, SkipReason)] {
        &self.skipped
    }

    /// Total number of recorded outcomes.
    pub fn total(&self) -> usize {
        self.successful.len() + self.skipped.len()
    }

    /// Render the fixed-format textual report.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("=== xtb batch summary ===\n");
        out.push_str(&format!("Run mode:  {}\n", self.mode));
        out.push_str(&format!(
            "Generated: {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        ));
        out.push('\n');

        out.push_str(&format!("Successful jobs ({}):\n", self.successful.len()));
        for input in &self.successful {
            out.push_str(&format!("  {}\n", input.display()));
        }
        out.push('\n');

        out.push_str(&format!("Skipped jobs ({}):\n", self.skipped.len()));
        for (input, reason) in &self.skipped {
            out.push_str(&format!("  {}  ({})\n", input.display(), reason));
        }
        out
    }

    /// Write the rendered report into the root folder, replacing any
    /// report left by a previous run.
    pub fn write_to(&self, root: &Path) -> BatchResult<PathBuf> {
        let path = root.join(SUMMARY_FILE_NAME);
        fs::write(&path, self.render()).map_err(BatchError::SummaryWrite)?;
        Ok(path)
    }
}
