//! Unit conversions applied before any threshold comparison.
//!
//! Upstream datasets are inconsistent: some deliver 2m temperature in Kelvin,
//! precipitation as a flux in kg/m²/s, and wind as (u, v) vector components.
//! The engine compares in °C, mm and m/s, so providers normalize through
//! these functions first.

/// Kelvin to degrees Celsius.
pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - 273.15
}

/// Precipitation flux (kg/m²/s) to accumulation in mm per hour.
///
/// 1 kg/m² of water is 1 mm of depth, so the flux scales by seconds-per-hour.
pub fn precipitation_flux_to_mm_per_hour(flux_kg_m2_s: f64) -> f64 {
    flux_kg_m2_s * 3600.0
}

/// Scalar wind speed from eastward/northward vector components.
pub fn wind_speed_from_components(u_ms: f64, v_ms: f64) -> f64 {
    (u_ms * u_ms + v_ms * v_ms).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kelvin_to_celsius() {
        assert!((kelvin_to_celsius(273.15) - 0.0).abs() < f64::EPSILON);
        assert!((kelvin_to_celsius(297.15) - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_precipitation_flux() {
        // 0.001 kg/m²/s sustained for an hour is 3.6 mm
        assert!((precipitation_flux_to_mm_per_hour(0.001) - 3.6).abs() < 1e-9);
        assert_eq!(precipitation_flux_to_mm_per_hour(0.0), 0.0);
    }

    #[test]
    fn test_wind_speed_from_components() {
        assert!((wind_speed_from_components(3.0, 4.0) - 5.0).abs() < 1e-9);
        assert_eq!(wind_speed_from_components(0.0, 0.0), 0.0);
        // Sign of the components never matters
        assert!((wind_speed_from_components(-3.0, -4.0) - 5.0).abs() < 1e-9);
    }
}
