//! setup-go - Go toolchain installer pipeline step
//!
//! Binary entry point: parses inputs, runs the step, maps any failure to a
//! single error line and exit code 1.

use clap::Parser;
use console::style;
use setup_go::cli::Cli;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // A CI step logs its progress by default; -v raises to debug, -vv trace
    let filter = match cli.verbose {
        0 => EnvFilter::new("setup_go=info"),
        1 => EnvFilter::new("setup_go=debug"),
        _ => EnvFilter::new("setup_go=trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    match setup_go::runner::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            debug!("{e:?}");
            ExitCode::FAILURE
        }
    }
}
