use serde::{Deserialize, Serialize};

use crate::utils::constants::{
    MAX_PLAUSIBLE_PRECIP_MM, MAX_PLAUSIBLE_TEMP_C, MAX_PLAUSIBLE_WIND_MS, MIN_PLAUSIBLE_TEMP_C,
    MISSING_SENTINEL_CUTOFF,
};

/// A measurement field carried by a daily observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObservationField {
    Temperature,
    Precipitation,
    WindSpeed,
    Humidity,
}

impl ObservationField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObservationField::Temperature => "temperature_c",
            ObservationField::Precipitation => "precipitation_mm",
            ObservationField::WindSpeed => "wind_speed_ms",
            ObservationField::Humidity => "humidity_pct",
        }
    }
}

/// Outcome of reading one field from an observation.
///
/// `Missing` is the upstream sentinel (a recognized gap in the record);
/// `Implausible` is a value outside physical limits that is not a sentinel,
/// e.g. a negative wind speed magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    Present(f64),
    Missing,
    Implausible(f64),
}

/// One historical measurement for a specific year at a fixed (month, day).
///
/// All observations in a series share the same calendar day; no two share
/// the same `year`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyObservation {
    pub year: i32,
    pub temperature_c: f64,
    pub precipitation_mm: f64,
    pub wind_speed_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity_pct: Option<f64>,
}

/// Check whether a raw value is the upstream missing-data sentinel.
pub fn is_missing_value(value: f64) -> bool {
    value <= MISSING_SENTINEL_CUTOFF
}

impl DailyObservation {
    pub fn new(year: i32, temperature_c: f64, precipitation_mm: f64, wind_speed_ms: f64) -> Self {
        Self {
            year,
            temperature_c,
            precipitation_mm,
            wind_speed_ms,
            humidity_pct: None,
        }
    }

    pub fn with_humidity(mut self, humidity_pct: f64) -> Self {
        self.humidity_pct = Some(humidity_pct);
        self
    }

    /// Read one field, classifying sentinels and physically impossible values.
    pub fn field(&self, field: ObservationField) -> FieldValue {
        let raw = match field {
            ObservationField::Temperature => self.temperature_c,
            ObservationField::Precipitation => self.precipitation_mm,
            ObservationField::WindSpeed => self.wind_speed_ms,
            ObservationField::Humidity => match self.humidity_pct {
                Some(v) => v,
                None => return FieldValue::Missing,
            },
        };

        if is_missing_value(raw) {
            return FieldValue::Missing;
        }
        if !raw.is_finite() || !Self::is_plausible(field, raw) {
            return FieldValue::Implausible(raw);
        }
        FieldValue::Present(raw)
    }

    fn is_plausible(field: ObservationField, value: f64) -> bool {
        match field {
            ObservationField::Temperature => {
                (MIN_PLAUSIBLE_TEMP_C..=MAX_PLAUSIBLE_TEMP_C).contains(&value)
            }
            ObservationField::Precipitation => (0.0..=MAX_PLAUSIBLE_PRECIP_MM).contains(&value),
            ObservationField::WindSpeed => (0.0..=MAX_PLAUSIBLE_WIND_MS).contains(&value),
            ObservationField::Humidity => (0.0..=100.0).contains(&value),
        }
    }
}
