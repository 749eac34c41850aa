use async_trait::async_trait;

use crate::error::Result;
use crate::models::{DailyObservation, Location};

pub mod power;
pub mod synthetic;

pub use power::{PowerClient, PowerConfig};
pub use synthetic::{SyntheticConfig, SyntheticProvider};

/// Source of historical daily climate records.
///
/// Implementations return, for a fixed (month, day) at a location, one
/// observation per year ordered by year. The series handed to the engine is
/// either complete or an explicit error: transport and format failures are
/// surfaced as `Http`/`UpstreamFormat`, a valid location with no record as
/// `NoData`. Sentinel-valued fields pass through untouched; filtering them
/// is the engine's job.
#[async_trait]
pub trait ClimateProvider: Send + Sync {
    async fn fetch_daily_series(
        &self,
        location: Location,
        month: u32,
        day: u32,
    ) -> Result<Vec<DailyObservation>>;
}
