//! Job execution: resolve the xtb executable and run single jobs.
//!
//! Execution is synchronous; the caller blocks until the external process
//! exits. No timeout is enforced, so a hung process blocks the remaining
//! batch. Every failure mode here is a per-job skip, never a batch abort.

use std::env;
use std::ffi::OsStr;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::models::{JobOutcome, SkipReason};
use crate::workspace::JobWorkspace;

/// Name searched for on PATH when no explicit executable is configured.
pub const EXECUTABLE_NAME: &str = "xtb";

/// Resolve the xtb executable once for the whole batch.
///
/// An explicitly configured path wins if it exists on disk; otherwise the
/// process PATH is searched for [`EXECUTABLE_NAME`]. The result applies to
/// every job in the batch; there is no per-job re-resolution. `None` means
/// every job will be skipped with "executable not found".
pub fn resolve_executable(configured: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = configured {
        if path.exists() {
            return Some(path.to_path_buf());
        }
        tracing::warn!(
            "Configured xtb path {} does not exist, searching PATH",
            path.display()
        );
    }

    env::var_os("PATH").and_then(|path_var| search_path(EXECUTABLE_NAME, &path_var))
}

/// Search a PATH-style variable for an executable name.
fn search_path(name: &str, path_var: &OsStr) -> Option<PathBuf> {
    env::split_paths(path_var)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}

/// Run one job synchronously and classify the result.
///
/// The process runs with the workspace as its working directory, stdout
/// and stderr redirected into the workspace log files. Exit code 0 is the
/// sole success signal.
pub fn run_job(
    executable: Option<&Path>,
    args: &[String],
    input: &Path,
    workspace: &JobWorkspace,
) -> JobOutcome {
    let Some(executable) = executable else {
        return JobOutcome::Skipped(input.to_path_buf(), SkipReason::ExecutableNotFound);
    };

    // The input may have been deleted between discovery and launch.
    if !input.exists() {
        return JobOutcome::Skipped(input.to_path_buf(), SkipReason::InputMissing);
    }

    let stdout_log = match File::create(&workspace.stdout_log) {
        Ok(file) => file,
        Err(e) => {
            return JobOutcome::Skipped(
                input.to_path_buf(),
                SkipReason::LaunchFailed(format!("cannot create stdout log: {}", e)),
            );
        }
    };
    let stderr_log = match File::create(&workspace.stderr_log) {
        Ok(file) => file,
        Err(e) => {
            return JobOutcome::Skipped(
                input.to_path_buf(),
                SkipReason::LaunchFailed(format!("cannot create stderr log: {}", e)),
            );
        }
    };

    tracing::debug!("$ {} {}", executable.display(), args.join(" "));

    let status = Command::new(executable)
        .args(args)
        .current_dir(&workspace.dir)
        .stdout(Stdio::from(stdout_log))
        .stderr(Stdio::from(stderr_log))
        .status();

    match status {
        Ok(status) if status.success() => JobOutcome::Succeeded(input.to_path_buf()),
        Ok(status) => JobOutcome::Skipped(
            input.to_path_buf(),
            SkipReason::NonZeroExit(status.code().unwrap_or(-1)),
        ),
        Err(e) => JobOutcome::Skipped(
            input.to_path_buf(),
            SkipReason::LaunchFailed(e.to_string()),
        ),
    }
}
