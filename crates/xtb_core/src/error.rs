//! Fatal error types for the batch driver.
//!
//! Only configuration-tier problems live here: they abort the run before
//! any job starts (or, for the summary, after all jobs finished). Per-job
//! failures never become a `BatchError`; they fold into a
//! [`SkipReason`](crate::models::SkipReason) instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a batch as a whole.
#[derive(Error, Debug)]
pub enum BatchError {
    /// The configured root folder does not exist or is not a directory.
    #[error("Root folder does not exist: {0}")]
    RootNotFound(PathBuf),

    /// The configured parallelism is below the minimum of 1.
    #[error("Parallelism must be at least 1, got {0}")]
    InvalidParallelism(u32),

    /// The final summary report could not be written to the root folder.
    #[error("Failed to write batch summary: {0}")]
    SummaryWrite(#[source] io::Error),
}

/// Result type for batch-level operations.
pub type BatchResult<T> = Result<T, BatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_display_context() {
        let err = BatchError::RootNotFound(PathBuf::from("/missing/folder"));
        assert!(err.to_string().contains("/missing/folder"));

        let err = BatchError::InvalidParallelism(0);
        assert!(err.to_string().contains("at least 1"));
        assert!(err.to_string().contains('0'));
    }
}
