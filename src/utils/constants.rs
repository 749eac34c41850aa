/// Missing-data sentinel cutoff. Upstream reanalysis records mark gaps with
/// -999; anything at or below this value is treated as missing, never as a
/// measurement.
pub const MISSING_SENTINEL_CUTOFF: f64 = -990.0;

/// Minimum number of valid years required before a percentage is trusted.
pub const DEFAULT_MIN_VALID_YEARS: usize = 20;

/// Physical plausibility bounds (surface daily values)
pub const MIN_PLAUSIBLE_TEMP_C: f64 = -90.0;
pub const MAX_PLAUSIBLE_TEMP_C: f64 = 60.0;
pub const MAX_PLAUSIBLE_PRECIP_MM: f64 = 2000.0;
pub const MAX_PLAUSIBLE_WIND_MS: f64 = 120.0;

/// NASA POWER daily point API
pub const POWER_BASE_URL: &str = "https://power.larc.nasa.gov/api/temporal/daily/point";
pub const POWER_PARAMETERS: &str = "T2M,PRECTOTCORR,WS2M,RH2M";
pub const POWER_COMMUNITY: &str = "AG";
pub const POWER_START_YEAR: i32 = 1984;
pub const POWER_END_YEAR: i32 = 2023;

/// Retry policy for upstream fetches
pub const FETCH_MAX_ATTEMPTS: u32 = 3;
pub const FETCH_BACKOFF_BASE_SECS: u64 = 2;

/// Synthetic provider defaults
pub const SYNTHETIC_DEFAULT_SEED: u64 = 42;
pub const SYNTHETIC_DEFAULT_YEARS: usize = 40;
