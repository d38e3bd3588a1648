//! Per-job outcome types.

use std::fmt;
use std::path::{Path, PathBuf};

/// Why a job was skipped instead of running to success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// No xtb executable was configured or found on PATH.
    ExecutableNotFound,
    /// The input file disappeared between discovery and launch.
    InputMissing,
    /// xtb ran but exited with a non-zero code.
    NonZeroExit(i32),
    /// The job could not be set up or the process failed to start.
    LaunchFailed(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::ExecutableNotFound => write!(f, "executable not found"),
            SkipReason::InputMissing => write!(f, "input file missing"),
            SkipReason::NonZeroExit(code) => write!(f, "exit code {}", code),
            SkipReason::LaunchFailed(msg) => write!(f, "launch failed: {}", msg),
        }
    }
}

/// Terminal classification of a single job.
///
/// Every discovered input yields exactly one outcome. Per-job failures are
/// folded into `Skipped` here rather than propagated as errors, so one bad
/// job can never stop the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    /// The process exited with code 0.
    Succeeded(PathBuf),
    /// The job did not run to completion; the reason says why.
    Skipped(PathBuf, SkipReason),
}

impl JobOutcome {
    /// The input file this outcome belongs to.
    pub fn input(&self) -> &Path {
        match self {
            JobOutcome::Succeeded(input) => input,
            JobOutcome::Skipped(input, _) => input,
        }
    }

    /// Whether the job succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, JobOutcome::Succeeded(_))
    }
}
