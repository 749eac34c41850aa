//! NASA POWER daily-point client.
//!
//! POWER serves 40 years of daily reanalysis data per grid point, no API key
//! required. Values arrive already normalized (T2M in °C, PRECTOTCORR in
//! mm/day, WS2M in m/s); gaps are marked with the -999 sentinel, which is
//! passed through for the engine to filter.
//!
//! API: `https://power.larc.nasa.gov/api/temporal/daily/point`

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use super::ClimateProvider;
use crate::error::{Result, RiskError};
use crate::models::{DailyObservation, Location};
use crate::utils::constants::{
    FETCH_BACKOFF_BASE_SECS, FETCH_MAX_ATTEMPTS, MISSING_SENTINEL_CUTOFF, POWER_BASE_URL,
    POWER_COMMUNITY, POWER_END_YEAR, POWER_PARAMETERS, POWER_START_YEAR,
};

/// Explicit construction-time configuration; no global mode toggles.
#[derive(Debug, Clone)]
pub struct PowerConfig {
    pub base_url: String,
    pub community: String,
    pub start_year: i32,
    pub end_year: i32,
    pub timeout: Duration,
    pub max_attempts: u32,
    pub backoff_base: Duration,
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self {
            base_url: POWER_BASE_URL.to_string(),
            community: POWER_COMMUNITY.to_string(),
            start_year: POWER_START_YEAR,
            end_year: POWER_END_YEAR,
            timeout: Duration::from_secs(10),
            max_attempts: FETCH_MAX_ATTEMPTS,
            backoff_base: Duration::from_secs(FETCH_BACKOFF_BASE_SECS),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PowerResponse {
    properties: Option<PowerProperties>,
}

#[derive(Debug, Deserialize)]
struct PowerProperties {
    parameter: Option<PowerParameters>,
}

/// Per-parameter maps keyed by `YYYYMMDD` date strings.
#[derive(Debug, Deserialize)]
struct PowerParameters {
    #[serde(rename = "T2M", default)]
    temperature: HashMap<String, f64>,
    #[serde(rename = "PRECTOTCORR", default)]
    precipitation: HashMap<String, f64>,
    #[serde(rename = "WS2M", default)]
    wind_speed: HashMap<String, f64>,
    #[serde(rename = "RH2M", default)]
    humidity: HashMap<String, f64>,
}

/// Extract the per-year series for one (month, day) from a parsed response.
/// A parameter absent for a date becomes the -999 sentinel; the engine
/// decides exclusion.
fn extract_series(body: &str, month: u32, day: u32) -> Result<Vec<DailyObservation>> {
    let parsed: PowerResponse = serde_json::from_str(body)?;
    let parameters = parsed
        .properties
        .and_then(|p| p.parameter)
        .ok_or_else(|| {
            RiskError::UpstreamFormat("missing properties.parameter in POWER response".into())
        })?;

    let value_or_sentinel = |map: &HashMap<String, f64>, key: &str| -> f64 {
        map.get(key).copied().unwrap_or(-999.0)
    };

    let mut series = Vec::new();
    for (date_str, &temperature) in &parameters.temperature {
        let Ok(date) = NaiveDate::parse_from_str(date_str, "%Y%m%d") else {
            continue;
        };
        if date.month() != month || date.day() != day {
            continue;
        }

        let mut observation = DailyObservation::new(
            date.year(),
            temperature,
            value_or_sentinel(&parameters.precipitation, date_str),
            value_or_sentinel(&parameters.wind_speed, date_str),
        );
        if let Some(&humidity) = parameters.humidity.get(date_str) {
            if humidity > MISSING_SENTINEL_CUTOFF {
                observation = observation.with_humidity(humidity);
            }
        }
        series.push(observation);
    }
    series.sort_by_key(|observation| observation.year);
    Ok(series)
}

pub struct PowerClient {
    http: Client,
    config: PowerConfig,
}

impl PowerClient {
    pub fn new(config: PowerConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("weather-odds/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, config })
    }

    async fn fetch_once(
        &self,
        location: Location,
        month: u32,
        day: u32,
    ) -> Result<Vec<DailyObservation>> {
        let start = format!("{}0101", self.config.start_year);
        let end = format!("{}1231", self.config.end_year);

        let response = self
            .http
            .get(&self.config.base_url)
            .query(&[
                ("parameters", POWER_PARAMETERS.to_string()),
                ("community", self.config.community.clone()),
                ("latitude", location.latitude.to_string()),
                ("longitude", location.longitude.to_string()),
                ("start", start),
                ("end", end),
                ("format", "JSON".to_string()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let series = extract_series(&body, month, day)?;

        if series.is_empty() {
            return Err(RiskError::NoData {
                latitude: location.latitude,
                longitude: location.longitude,
            });
        }

        debug!(
            years = series.len(),
            latitude = location.latitude,
            longitude = location.longitude,
            "fetched POWER daily series"
        );
        Ok(series)
    }
}

#[async_trait]
impl ClimateProvider for PowerClient {
    /// Fetch with bounded exponential backoff on transport failures: the
    /// delay doubles per attempt from `backoff_base`, up to `max_attempts`.
    /// Format and no-data errors are not retried.
    async fn fetch_daily_series(
        &self,
        location: Location,
        month: u32,
        day: u32,
    ) -> Result<Vec<DailyObservation>> {
        let mut delay = self.config.backoff_base;
        let mut attempt = 1;
        loop {
            match self.fetch_once(location, month, day).await {
                Err(RiskError::Http(err)) if attempt < self.config.max_attempts => {
                    warn!(
                        attempt,
                        max_attempts = self.config.max_attempts,
                        error = %err,
                        "POWER request failed, retrying after {:?}",
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                    attempt += 1;
                }
                other => return other,
            }
        }
    }
}
