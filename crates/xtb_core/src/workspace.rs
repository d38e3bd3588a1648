//! Per-job workspace: an isolated output directory plus log file paths.
//!
//! Each job gets a fresh directory next to its input file, named from the
//! input base name, the mode prefix, and a second-resolution creation
//! timestamp. Workspaces are never deleted by this system; they stay
//! behind as an audit trail.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::models::RunMode;

/// Timestamp format embedded in workspace directory names.
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Isolated output directory for one job, with the two files the external
/// process output streams are redirected into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobWorkspace {
    /// Directory the job runs in.
    pub dir: PathBuf,
    /// Captured stdout of the xtb process.
    pub stdout_log: PathBuf,
    /// Captured stderr of the xtb process.
    pub stderr_log: PathBuf,
}

impl JobWorkspace {
    /// Derive and create the workspace for one input.
    ///
    /// The timestamp gives distinct directories across repeated runs;
    /// two runs of the same input within one second would collide, which
    /// is accepted. Creation is idempotent and race-tolerant: an already
    /// existing directory is treated as success.
    pub fn prepare(input: &Path, mode: RunMode) -> io::Result<Self> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        Self::prepare_with_timestamp(input, mode, &timestamp)
    }

    fn prepare_with_timestamp(input: &Path, mode: RunMode, timestamp: &str) -> io::Result<Self> {
        let parent = input.parent().unwrap_or_else(|| Path::new("."));
        let base = base_name(input);

        let dir = parent.join(format!("{}{}_{}", mode.dir_prefix(), base, timestamp));
        fs::create_dir_all(&dir)?;

        let stdout_log = dir.join(format!("{}.xtb.log", base));
        let stderr_log = dir.join(format!("{}.xtb.err.log", base));

        Ok(Self {
            dir,
            stdout_log,
            stderr_log,
        })
    }
}

/// Base name of the input without extension, used in directory and log names.
fn base_name(input: &Path) -> String {
    input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "input".to_string())
}
