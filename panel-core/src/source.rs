//! The weather source abstraction and its Open-Meteo implementation.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use log::debug;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::conditions;
use crate::config::TemperatureUnit;
use crate::model::{Location, WeatherReading};

const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Bound on every request so a stalled server cannot push the loop
/// past its next scheduled cycle.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything that can go wrong in one poll cycle. Always recoverable:
/// the caller keeps the previous frame and tries again next cycle.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to reach the weather service: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("weather request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("unexpected weather response shape: {0}")]
    Decode(String),
}

/// Anything that can produce a current [`WeatherReading`] for a
/// location.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    async fn current(&self, location: &Location) -> Result<WeatherReading, FetchError>;
}

/// Shared HTTP client for the geocoding and weather endpoints, with
/// the request timeout applied.
pub fn http_client() -> reqwest::Result<Client> {
    Client::builder().timeout(REQUEST_TIMEOUT).build()
}

#[derive(Debug, Clone)]
pub struct OpenMeteoSource {
    http: Client,
    unit: TemperatureUnit,
}

impl OpenMeteoSource {
    pub fn new(http: Client, unit: TemperatureUnit) -> Self {
        Self { http, unit }
    }
}

#[async_trait]
impl WeatherSource for OpenMeteoSource {
    async fn current(&self, location: &Location) -> Result<WeatherReading, FetchError> {
        debug!(
            "fetching current conditions for {:.4}, {:.4}",
            location.latitude, location.longitude
        );

        let res = self
            .http
            .get(FORECAST_URL)
            .query(&[
                ("latitude", location.latitude.to_string()),
                ("longitude", location.longitude.to_string()),
                ("current", "temperature_2m,weather_code".to_string()),
                ("daily", "precipitation_probability_max".to_string()),
                ("timezone", "auto".to_string()),
                ("temperature_unit", self.unit.api_value().to_string()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status { status, body: truncate_body(&body) });
        }

        reading_from_body(&body)
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentBlock,
    daily: Option<DailyBlock>,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    time: String,
    temperature_2m: f64,
    weather_code: u16,
}

#[derive(Debug, Deserialize)]
struct DailyBlock {
    #[serde(default)]
    precipitation_probability_max: Vec<Option<u8>>,
}

fn reading_from_body(body: &str) -> Result<WeatherReading, FetchError> {
    let parsed: ForecastResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    // Usually minute-precision local time ("2024-01-01T12:00"), but
    // tolerate a seconds-bearing variant too.
    let observed_at = NaiveDateTime::parse_from_str(&parsed.current.time, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(&parsed.current.time, "%Y-%m-%dT%H:%M:%S"))
        .ok();

    let code = parsed.current.weather_code;

    Ok(WeatherReading {
        temperature: parsed.current.temperature_2m,
        condition_code: code,
        description: conditions::describe(code),
        observed_at,
        rain_chance: parsed
            .daily
            .as_ref()
            .and_then(|d| d.precipitation_probability_max.first().copied().flatten()),
    })
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    // Back off to a char boundary so multi-byte text can't panic the
    // slice.
    let mut cut = MAX;
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }

    format!("{}...", &body[..cut])
}
