//! Input discovery: recursive scan of the root folder for structure files.
//!
//! The scan is depth-unbounded and deterministic: entries of each
//! directory are visited in sorted order, so repeated runs over the same
//! tree always process inputs in the same sequence.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BatchError, BatchResult};
use crate::models::RunMode;

/// Extension of eligible structure files.
pub const STRUCTURE_EXTENSION: &str = "xyz";

/// Output name xtb gives an optimized geometry.
///
/// Hessian-only runs read exactly these files; optimization runs must not
/// re-optimize them.
pub const OPTIMIZED_GEOMETRY_NAME: &str = "xtbopt.xyz";

/// Discover all eligible structure files under `root` for `mode`.
///
/// A missing root folder is a configuration error and aborts the run
/// before any job starts. An empty result is valid: the batch completes
/// with zero jobs and still writes a summary.
pub fn discover_inputs(root: &Path, mode: RunMode) -> BatchResult<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(BatchError::RootNotFound(root.to_path_buf()));
    }

    let mut found = Vec::new();
    collect(root, mode, &mut found);

    tracing::info!(
        "Discovered {} input file(s) under {}",
        found.len(),
        root.display()
    );
    Ok(found)
}

/// Recursively collect eligible inputs, directories walked in sorted order.
fn collect(dir: &Path, mode: RunMode, found: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Cannot read directory {}: {}", dir.display(), e);
            return;
        }
    };

    let mut paths: Vec<PathBuf> = entries.filter_map(|e| e.ok().map(|e| e.path())).collect();
    paths.sort();

    for path in paths {
        if path.is_dir() {
            collect(&path, mode, found);
        } else if is_eligible(&path, mode) {
            found.push(path);
        }
    }
}

/// Mode-dependent inclusion filter.
fn is_eligible(path: &Path, mode: RunMode) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let has_structure_ext = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case(STRUCTURE_EXTENSION));
    if !has_structure_ext {
        return false;
    }

    match mode {
        RunMode::HessianOnly => name == OPTIMIZED_GEOMETRY_NAME,
        RunMode::Optimize | RunMode::OptimizeAndHessian => name != OPTIMIZED_GEOMETRY_NAME,
    }
}
