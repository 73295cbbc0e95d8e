//! Command implementation for the consolidation CLI

use crate::cli::args::Args;
use crate::config::PipelineConfig;
use crate::constants::{CONSOLE_LOG_DIRECTIVE, RUN_LOG_FILE};
use crate::processor::{Pipeline, RunSummary};
use crate::{Error, Result};
use colored::*;
use std::time::Instant;
use tracing::{debug, info};

/// Set up console diagnostics on stderr
///
/// Only warnings and errors from this crate reach the console; the run log
/// is the detailed record of a run.
pub fn setup_logging() {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::new(CONSOLE_LOG_DIRECTIVE);

    // try_init so repeated setup (tests) is harmless
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init();
}

/// Run one consolidation over the current directory
///
/// The pipeline (and its log file) is dropped before this returns, so the
/// run log is closed whatever the outcome.
pub fn run(args: Args) -> Result<RunSummary> {
    let start_time = Instant::now();
    debug!("Command line arguments: {:?}", args);

    print_banner();

    let config = PipelineConfig::default();
    let mut pipeline = Pipeline::create(config)?;
    let result = pipeline.run();
    drop(pipeline);

    if result.is_ok() {
        info!("Run completed in {:.2?}", start_time.elapsed());
        println!(
            "\n{} {}",
            "Processing complete. Details in".bright_green().bold(),
            RUN_LOG_FILE
        );
    }

    result
}

/// Process exit status for a finished run
///
/// Finding no input files ends the run normally; any other error fails it.
pub fn exit_status(result: &Result<RunSummary>) -> u8 {
    match result {
        Ok(_) | Err(Error::NoInputFiles { .. }) => 0,
        Err(_) => 1,
    }
}

fn print_banner() {
    println!("{}", "==============================================".bright_blue());
    println!(
        "  {}",
        "ANS CLAIMS EXPENSE CONSOLIDATION".bright_green().bold()
    );
    println!("{}", "==============================================".bright_blue());
}
