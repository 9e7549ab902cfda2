//! One-shot place-name resolution against the Open-Meteo geocoding API.
//!
//! Unlike the weather fetch, a failure here is fatal: the panel cannot
//! run without coordinates. [`resolve_with_retry`] gives the network a
//! bounded number of chances at boot before the caller aborts.

use anyhow::{Context, Result, anyhow};
use log::warn;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::model::Location;
use crate::source::truncate_body;

const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

/// Attempts made before giving up on startup geocoding.
pub const STARTUP_ATTEMPTS: u32 = 3;

const RETRY_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    name: String,
    latitude: f64,
    longitude: f64,
    country_code: Option<String>,
}

/// Resolve a place name and country code to coordinates, taking the
/// best (first) match the service returns.
pub async fn resolve(http: &Client, place: &str, country: &str) -> Result<Location> {
    let res = http
        .get(GEOCODING_URL)
        .query(&[
            ("name", place),
            ("count", "1"),
            ("language", "en"),
            ("format", "json"),
            ("country", country),
        ])
        .send()
        .await
        .context("Failed to send request to the geocoding service")?;

    let status = res.status();
    let body = res
        .text()
        .await
        .context("Failed to read geocoding response body")?;

    if !status.is_success() {
        return Err(anyhow!(
            "Geocoding request failed with status {}: {}",
            status,
            truncate_body(&body),
        ));
    }

    let top = top_result(&body)
        .with_context(|| format!("No usable geocoding result for '{place}' ({country})"))?;

    Ok(Location {
        country_code: top.country_code.unwrap_or_else(|| country.to_string()),
        place_name: top.name,
        latitude: top.latitude,
        longitude: top.longitude,
    })
}

/// [`resolve`] with a fixed-delay bounded retry, for flaky networks at
/// boot time.
pub async fn resolve_with_retry(
    http: &Client,
    place: &str,
    country: &str,
    attempts: u32,
) -> Result<Location> {
    retry_bounded(attempts, RETRY_DELAY, || resolve(http, place, country)).await
}

/// Run `attempt_fn` up to `attempts` times (at least once), sleeping
/// `delay` between tries, returning the last error on exhaustion.
async fn retry_bounded<T, F, Fut>(attempts: u32, delay: Duration, mut attempt_fn: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let attempts = attempts.max(1);
    let mut last_err = anyhow!("geocoding was never attempted");

    for attempt in 1..=attempts {
        match attempt_fn().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                warn!("geocoding attempt {attempt}/{attempts} failed: {err:#}");
                last_err = err;
            }
        }

        if attempt < attempts {
            tokio::time::sleep(delay).await;
        }
    }

    Err(last_err)
}

fn top_result(body: &str) -> Result<SearchResult> {
    let parsed: SearchResponse =
        serde_json::from_str(body).context("Failed to parse geocoding JSON")?;

    parsed
        .results
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("Geocoding returned no results"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    const LONDON_BODY: &str = r#"{
        "results": [
            {
                "id": 2643743,
                "name": "London",
                "latitude": 51.50853,
                "longitude": -0.12574,
                "country_code": "GB",
                "admin1": "England"
            }
        ],
        "generationtime_ms": 1.1
    }"#;

    #[test]
    fn top_result_takes_the_best_match() {
        let top = top_result(LONDON_BODY).expect("fixture parses");

        assert_eq!(top.name, "London");
        assert!((top.latitude - 51.5).abs() < 0.1);
        assert!((top.longitude - -0.12).abs() < 0.1);
        assert_eq!(top.country_code.as_deref(), Some("GB"));
    }

    #[test]
    fn resolution_is_deterministic_for_a_fixed_response() {
        let a = top_result(LONDON_BODY).unwrap();
        let b = top_result(LONDON_BODY).unwrap();

        assert_eq!(a.latitude, b.latitude);
        assert_eq!(a.longitude, b.longitude);
    }

    #[test]
    fn empty_results_is_an_error() {
        let err = top_result(r#"{"generationtime_ms": 0.5}"#).unwrap_err();
        assert!(err.to_string().contains("no results"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = top_result("not json at all").unwrap_err();
        assert!(err.to_string().contains("parse"));
    }

    #[tokio::test]
    async fn retry_recovers_when_a_later_attempt_succeeds() {
        let calls = Cell::new(0u32);

        let resolved = retry_bounded(3, Duration::ZERO, || {
            let attempt = calls.get() + 1;
            calls.set(attempt);
            async move {
                if attempt < 3 { Err(anyhow!("boot network still down")) } else { Ok(attempt) }
            }
        })
        .await
        .expect("third attempt succeeds");

        assert_eq!(resolved, 3);
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test]
    async fn retry_returns_the_last_error_after_exhaustion() {
        let calls = Cell::new(0u32);

        let err = retry_bounded(3, Duration::ZERO, || {
            let attempt = calls.get() + 1;
            calls.set(attempt);
            async move { Err::<Location, _>(anyhow!("attempt {attempt} failed")) }
        })
        .await
        .unwrap_err();

        assert_eq!(calls.get(), 3);
        assert_eq!(err.to_string(), "attempt 3 failed");
    }

    #[tokio::test]
    async fn zero_attempts_still_tries_once() {
        let calls = Cell::new(0u32);

        let _ = retry_bounded(0, Duration::ZERO, || {
            calls.set(calls.get() + 1);
            async { Err::<Location, _>(anyhow!("no luck")) }
        })
        .await;

        assert_eq!(calls.get(), 1);
    }
}
