//! Seeded synthetic climate record generator.
//!
//! Stands in for the real upstream in tests, demos and offline use. Output is
//! deterministic for a given seed and loosely climate-shaped: a latitude- and
//! season-dependent base temperature with per-year scatter, wetter and calmer
//! summers, higher humidity near coasts.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::ClimateProvider;
use crate::error::Result;
use crate::models::{DailyObservation, Location};
use crate::utils::constants::{SYNTHETIC_DEFAULT_SEED, SYNTHETIC_DEFAULT_YEARS};
use crate::utils::units::wind_speed_from_components;

#[derive(Debug, Clone)]
pub struct SyntheticConfig {
    pub seed: u64,
    pub years: usize,
    pub first_year: i32,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            seed: SYNTHETIC_DEFAULT_SEED,
            years: SYNTHETIC_DEFAULT_YEARS,
            first_year: 1984,
        }
    }
}

pub struct SyntheticProvider {
    config: SyntheticConfig,
}

impl SyntheticProvider {
    pub fn new(config: SyntheticConfig) -> Self {
        Self { config }
    }

    /// Seasonal baselines per month: (temperature shift °C, precipitation
    /// base mm, wind base m/s). Northern-hemisphere convention.
    fn seasonal_baseline(month: u32) -> (f64, f64, f64) {
        match month {
            12 | 1 | 2 => (-15.0, 5.0, 10.0),
            6 | 7 | 8 => (15.0, 10.0, 5.0),
            3 | 4 | 5 => (0.0, 8.0, 7.0),
            _ => (5.0, 7.0, 8.0),
        }
    }

    fn round1(value: f64) -> f64 {
        (value * 10.0).round() / 10.0
    }
}

#[async_trait]
impl ClimateProvider for SyntheticProvider {
    async fn fetch_daily_series(
        &self,
        location: Location,
        month: u32,
        _day: u32,
    ) -> Result<Vec<DailyObservation>> {
        let (seasonal_shift, rain_base, wind_base) = Self::seasonal_baseline(month);
        let base_temp = 25.0 - location.latitude.abs() * 0.5 + seasonal_shift;

        // Coastal longitudes trend more humid
        let humidity_floor = if location.longitude.abs() < 30.0 || location.longitude.abs() > 100.0
        {
            75.0
        } else {
            70.0
        };

        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let mut series = Vec::with_capacity(self.config.years);
        for offset in 0..self.config.years {
            let temperature = base_temp + rng.gen_range(-8.0..8.0);
            let precipitation = (rain_base + rng.gen_range(-6.0..6.0)).max(0.0);

            // Wind is drawn as (u, v) components and reduced to a scalar
            let component_scale = wind_base / std::f64::consts::SQRT_2;
            let u = rng.gen_range(0.0..component_scale * 1.6);
            let v = rng.gen_range(0.0..component_scale * 1.6);
            let wind_speed = wind_speed_from_components(u, v);

            let humidity = rng.gen_range(humidity_floor..95.0);

            series.push(
                DailyObservation::new(
                    self.config.first_year + offset as i32,
                    Self::round1(temperature),
                    Self::round1(precipitation),
                    Self::round1(wind_speed),
                )
                .with_humidity(Self::round1(humidity)),
            );
        }

        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kyiv() -> Location {
        Location::new(50.45, 30.52)
    }

    #[tokio::test]
    async fn test_deterministic_for_same_seed() {
        let provider = SyntheticProvider::new(SyntheticConfig::default());
        let first = provider.fetch_daily_series(kyiv(), 7, 15).await.unwrap();
        let second = provider.fetch_daily_series(kyiv(), 7, 15).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_series_shape() {
        let provider = SyntheticProvider::new(SyntheticConfig {
            years: 25,
            ..SyntheticConfig::default()
        });
        let series = provider.fetch_daily_series(kyiv(), 7, 15).await.unwrap();

        assert_eq!(series.len(), 25);
        // Years are consecutive and unique
        for (offset, observation) in series.iter().enumerate() {
            assert_eq!(observation.year, 1984 + offset as i32);
        }
        // Values stay physically sane
        for observation in &series {
            assert!(observation.precipitation_mm >= 0.0);
            assert!(observation.wind_speed_ms >= 0.0);
            let humidity = observation.humidity_pct.unwrap();
            assert!((0.0..=100.0).contains(&humidity));
        }
    }

    #[tokio::test]
    async fn test_winter_colder_than_summer() {
        let provider = SyntheticProvider::new(SyntheticConfig::default());
        let summer = provider.fetch_daily_series(kyiv(), 7, 15).await.unwrap();
        let winter = provider.fetch_daily_series(kyiv(), 1, 15).await.unwrap();

        let mean = |series: &[DailyObservation]| -> f64 {
            series.iter().map(|o| o.temperature_c).sum::<f64>() / series.len() as f64
        };
        assert!(mean(&summer) > mean(&winter));
    }
}
