mod cli;

use crate::cli::Cli;
use anyhow::{Context, Result};
use clap::Parser;
use logstat_core::conf::MonitorSettings;
use logstat_core::logging::init_logging;
use logstat_core::logs::{RunSummary, run_monitor};
use std::io::{self, BufReader};

fn main() {
    let cli = Cli::parse();

    let settings = match cli.settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("logstat: {e:#}");
            std::process::exit(1);
        }
    };

    init_logging(settings.log_level, settings.log_format, settings.color);
    tracing::debug!("Starting logstat {}", env!("CARGO_PKG_VERSION"));

    match run(&settings) {
        Ok(summary) => tracing::info!(
            stop = ?summary.stop,
            entries = summary.entries,
            parse_failures = summary.parse_failures,
            reports = summary.reports,
            "logstat finished"
        ),
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "logstat failed");
            std::process::exit(1);
        }
    }
}

fn run(settings: &MonitorSettings) -> Result<RunSummary> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build Tokio runtime")?;

    let input = BufReader::new(io::stdin());

    runtime.block_on(run_monitor(settings, input, io::stdout()))
}
