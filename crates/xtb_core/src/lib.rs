//! xtb batch driver core.
//!
//! This crate contains the whole orchestration engine with no UI
//! dependencies: input discovery, per-job workspace isolation, command
//! construction, external process execution, and summary reporting.
//! It can be used by the CLI binary or embedded elsewhere.

pub mod command;
pub mod config;
pub mod discovery;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod runner;
pub mod summary;
pub mod workspace;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
