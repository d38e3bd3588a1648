mod cli;
mod logging;


use anyhow::Context;
use clap::Parser;

use xtb_core::config::{self, BatchConfig, Settings};
use xtb_core::models::RunMode;
use xtb_core::orchestrator::BatchOrchestrator;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::setup(cli.verbose, cli.quiet);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    tracing::info!("xtb-batch v{}", xtb_core::version());

    let settings = match &cli.config {
        Some(path) => config::load_settings(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };

    let batch_config = resolve_config(cli, &settings);

    // A batch that completed with skips still exits zero; only
    // configuration-tier failures reach the error path.
    let summary = BatchOrchestrator::new(batch_config).run()?;

    println!(
        "{} succeeded, {} skipped",
        summary.successful().len(),
        summary.skipped().len()
    );
    Ok(())
}

/// Collapse command-line flags over file settings into the resolved
/// batch configuration.
fn resolve_config(cli: &Cli, settings: &Settings) -> BatchConfig {
    let mut batch_config = BatchConfig::from_settings(settings);

    if let Some(root) = &cli.root {
        batch_config.root = root.clone();
    }
    if let Some(mode) = cli.mode {
        batch_config.mode = RunMode::from(mode);
    }
    if let Some(parallel) = cli.parallel {
        batch_config.parallel = parallel;
    }
    if let Some(xtb) = &cli.xtb {
        batch_config.executable = Some(xtb.clone());
    }

    batch_config
}
