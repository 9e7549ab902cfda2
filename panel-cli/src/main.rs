//! Binary crate for the `weather-panel` daemon.
//!
//! This crate focuses on:
//! - Parsing CLI arguments and loading the config
//! - Resolving the configured place to coordinates at startup
//! - Driving the poll loop against a console drawing surface

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::info;
use panel_core::{Config, CycleOutcome, OpenMeteoSource, Poller, geocode, source};
use tokio::sync::watch;

mod cli;
mod console;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = cli::Cli::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    args.apply_overrides(&mut config)?;

    let http = source::http_client().context("Failed to build the HTTP client")?;

    // Fatal if this fails after the bounded retries: the panel cannot
    // run without coordinates.
    let location = geocode::resolve_with_retry(
        &http,
        &config.place_name,
        &config.country_code,
        geocode::STARTUP_ATTEMPTS,
    )
    .await
    .with_context(|| {
        format!(
            "Could not resolve '{}' ({}) to coordinates",
            config.place_name, config.country_code
        )
    })?;

    info!(
        "resolved {} ({}) to {:.4}, {:.4}",
        location.place_name, location.country_code, location.latitude, location.longitude
    );

    let source = OpenMeteoSource::new(http, config.temperature_unit);
    let surface = console::ConsoleSurface::new();
    let mut poller = Poller::new(
        source,
        surface,
        location,
        config.temperature_unit,
        config.refresh_interval(),
    );

    if args.once {
        if poller.run_cycle().await == CycleOutcome::Skipped {
            bail!("Poll cycle failed; see the log for details");
        }
        return Ok(());
    }

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_tx.send(true);
        }
    });

    poller.run(shutdown_rx).await;

    Ok(())
}
