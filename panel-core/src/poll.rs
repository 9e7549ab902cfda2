//! The fetch-render-sleep cycle.
//!
//! Every cycle is an independent, equally-spaced attempt: a failed
//! fetch is logged and the surface keeps its previous frame, with no
//! backoff and no circuit breaker.

use log::{info, warn};
use std::time::Duration;
use tokio::sync::watch;

use crate::config::TemperatureUnit;
use crate::model::Location;
use crate::render::{DrawSurface, Frame};
use crate::source::WeatherSource;

/// What a single poll cycle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Fetch succeeded and the new frame is on the surface.
    Rendered,
    /// Fetch or draw failed; the surface still shows the prior frame.
    Skipped,
}

pub struct Poller<S, D> {
    source: S,
    surface: D,
    location: Location,
    unit: TemperatureUnit,
    interval: Duration,
}

impl<S: WeatherSource, D: DrawSurface> Poller<S, D> {
    pub fn new(
        source: S,
        surface: D,
        location: Location,
        unit: TemperatureUnit,
        interval: Duration,
    ) -> Self {
        Self { source, surface, location, unit, interval }
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    /// Run one fetch-and-render attempt.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        let reading = match self.source.current(&self.location).await {
            Ok(reading) => reading,
            Err(err) => {
                warn!("weather fetch failed, keeping previous frame: {err}");
                return CycleOutcome::Skipped;
            }
        };

        let frame = Frame::compose(&self.location.place_name, &reading, self.unit);

        if let Err(err) = self.surface.draw(&frame) {
            warn!("draw failed, keeping previous frame: {err:#}");
            return CycleOutcome::Skipped;
        }

        info!(
            "rendered {} {} (updated {})",
            frame.temperature.as_deref().unwrap_or("--"),
            frame.description,
            frame.updated.as_deref().unwrap_or("n/a"),
        );

        CycleOutcome::Rendered
    }

    /// Poll until the shutdown signal fires. Success and failure both
    /// sleep the same fixed interval before the next attempt.
    pub async fn run(&mut self, mut shutdown: watch::Receiver<bool>) {
        loop {
            let _ = self.run_cycle().await;

            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {}
                _ = shutdown.changed() => {
                    info!("shutdown requested, stopping poll loop");
                    return;
                }
            }
        }
    }
}
