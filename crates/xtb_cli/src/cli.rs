//! Command-line definition for xtb-batch.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use xtb_core::models::RunMode;

/// Batch-drive xtb over a folder tree of .xyz structure files.
///
/// Every eligible input gets its own timestamped output directory with
/// captured xtb logs; a summary report is written at the root folder.
#[derive(Parser, Debug)]
#[command(name = "xtb-batch", version, about)]
pub struct Cli {
    /// Root folder to scan for structure files.
    ///
    /// Falls back to the settings file (default: current directory).
    pub root: Option<PathBuf>,

    /// Calculation to request for every input.
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Worker count forwarded to xtb via --parallel.
    #[arg(short, long)]
    pub parallel: Option<u32>,

    /// Explicit path to the xtb executable (default: search PATH).
    #[arg(long)]
    pub xtb: Option<PathBuf>,

    /// TOML settings file; command-line flags override its values.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Silence all log output.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Run mode as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Geometry optimization.
    Opt,
    /// Optimization plus Hessian.
    Ohess,
    /// Hessian only, on previously optimized geometries.
    Hess,
}

impl From<ModeArg> for RunMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Opt => RunMode::Optimize,
            ModeArg::Ohess => RunMode::OptimizeAndHessian,
            ModeArg::Hess => RunMode::HessianOnly,
        }
    }
}
