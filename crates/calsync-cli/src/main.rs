//! calsync CLI entry point.

use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;
use tracing::{Level, info, warn};
use tracing_subscriber::EnvFilter;

use calsync_cli::cli::Cli;
use calsync_cli::config::SourcesConfig;
use calsync_cli::error::CliResult;
use calsync_cli::pipeline;
use calsync_core::merge_and_write;
use calsync_providers::GoogleCalendarClient;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.debug {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    info!("starting calendar sync");

    let config = SourcesConfig::load(&cli.sources)?;
    info!(count = config.sources.len(), "loaded calendar sources");

    let (time_min, time_max) = pipeline::sync_window(Utc::now(), cli.past_months, cli.future_months);
    info!(
        from = %time_min.format("%Y-%m-%d"),
        to = %time_max.format("%Y-%m-%d"),
        "fetch window"
    );

    if cli.api_key.is_none() {
        warn!("no API key configured; public calendar access may be limited");
    }
    let client = GoogleCalendarClient::new(cli.api_key);

    let events = pipeline::collect_events(&client, &config.sources, time_min, time_max);
    info!(count = events.len(), "collected events across all sources");

    merge_and_write(&cli.base, &events, &cli.output)?;
    info!(output = %cli.output.display(), "wrote merged catalog");

    Ok(())
}
