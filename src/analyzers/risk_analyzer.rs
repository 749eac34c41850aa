use std::collections::BTreeMap;

use tracing::warn;

use crate::error::{Result, RiskError};
use crate::models::{
    Activity, DailyObservation, FieldValue, ObservationField, RiskResult, RuleSet, RuleTable,
};
use crate::utils::constants::DEFAULT_MIN_VALID_YEARS;

/// Field readings of one observation, captured once so that evaluating all
/// activities shares a single pass over the raw values.
#[derive(Debug, Clone, Copy)]
struct FieldProfile {
    temperature: FieldValue,
    precipitation: FieldValue,
    wind_speed: FieldValue,
    humidity: FieldValue,
}

impl FieldProfile {
    fn capture(observation: &DailyObservation) -> Self {
        let profile = Self {
            temperature: observation.field(ObservationField::Temperature),
            precipitation: observation.field(ObservationField::Precipitation),
            wind_speed: observation.field(ObservationField::WindSpeed),
            humidity: observation.field(ObservationField::Humidity),
        };

        for field in [
            ObservationField::Temperature,
            ObservationField::Precipitation,
            ObservationField::WindSpeed,
            ObservationField::Humidity,
        ] {
            if let FieldValue::Implausible(value) = profile.get(field) {
                warn!(
                    year = observation.year,
                    field = field.as_str(),
                    value,
                    "excluding observation with physically impossible value"
                );
            }
        }

        profile
    }

    fn get(&self, field: ObservationField) -> FieldValue {
        match field {
            ObservationField::Temperature => self.temperature,
            ObservationField::Precipitation => self.precipitation,
            ObservationField::WindSpeed => self.wind_speed,
            ObservationField::Humidity => self.humidity,
        }
    }
}

/// The historical risk aggregation engine.
///
/// A pure function of (observation series, rule table): no internal state is
/// mutated, so one analyzer may be shared freely across request-handling
/// tasks. The rule table is immutable after startup.
#[derive(Debug, Clone)]
pub struct RiskAnalyzer {
    table: &'static RuleTable,
    min_valid_years: usize,
}

impl Default for RiskAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl RiskAnalyzer {
    pub fn new() -> Self {
        Self {
            table: RuleTable::shared(),
            min_valid_years: DEFAULT_MIN_VALID_YEARS,
        }
    }

    pub fn with_table(mut self, table: &'static RuleTable) -> Self {
        self.table = table;
        self
    }

    /// Override the valid-year floor below which results are refused.
    pub fn with_min_valid_years(mut self, min_valid_years: usize) -> Self {
        self.min_valid_years = min_valid_years;
        self
    }

    pub fn rule_table(&self) -> &RuleTable {
        self.table
    }

    /// Bad-day odds for a single activity.
    ///
    /// Percentage is `round(bad / valid * 100)` with round-half-away-from-zero
    /// (`f64::round`). Fails with `InsufficientData` when fewer than the
    /// configured floor of valid years survive filtering.
    pub fn evaluate(
        &self,
        observations: &[DailyObservation],
        activity: Activity,
    ) -> Result<RiskResult> {
        let rules = self.table.get(activity)?;
        let profiles: Vec<FieldProfile> =
            observations.iter().map(FieldProfile::capture).collect();
        self.aggregate(&profiles, rules)
    }

    /// Like [`evaluate`](Self::evaluate) but resolving an external activity
    /// name first; unregistered names fail with `UnknownActivity`.
    pub fn evaluate_by_name(
        &self,
        observations: &[DailyObservation],
        name: &str,
    ) -> Result<RiskResult> {
        let (activity, _) = self.table.get_by_name(name)?;
        self.evaluate(observations, activity)
    }

    /// Bad-day odds for every registered activity in one pass over the
    /// series. Per-activity results are identical to the single-activity
    /// path; only the field capture is amortized.
    pub fn evaluate_all(
        &self,
        observations: &[DailyObservation],
    ) -> Result<BTreeMap<Activity, RiskResult>> {
        let profiles: Vec<FieldProfile> =
            observations.iter().map(FieldProfile::capture).collect();

        let mut results = BTreeMap::new();
        for activity in self.table.activities() {
            let rules = self.table.get(activity)?;
            results.insert(activity, self.aggregate(&profiles, rules)?);
        }
        Ok(results)
    }

    fn aggregate(&self, profiles: &[FieldProfile], rules: &RuleSet) -> Result<RiskResult> {
        let required = rules.required_fields();

        let mut valid_years = 0usize;
        let mut bad_years = 0usize;
        for bad in profiles
            .iter()
            .filter_map(|profile| Self::classify(profile, rules, &required))
        {
            valid_years += 1;
            if bad {
                bad_years += 1;
            }
        }

        // A floor of zero still refuses an empty denominator
        let required_years = self.min_valid_years.max(1);
        if valid_years < required_years {
            return Err(RiskError::InsufficientData {
                valid_years,
                required_years,
            });
        }

        let percentage = (bad_years as f64 / valid_years as f64 * 100.0).round() as u8;
        Ok(RiskResult::new(percentage, valid_years))
    }

    /// Classify one observation against one rule set: `None` when the year is
    /// excluded (missing sentinel or implausible value in a required field),
    /// otherwise whether any condition is violated.
    fn classify(
        profile: &FieldProfile,
        rules: &RuleSet,
        required: &[ObservationField],
    ) -> Option<bool> {
        for &field in required {
            match profile.get(field) {
                FieldValue::Present(_) => {}
                FieldValue::Missing | FieldValue::Implausible(_) => return None,
            }
        }

        let bad = rules.conditions().iter().any(|condition| {
            match profile.get(condition.field) {
                FieldValue::Present(value) => condition.is_violated_by(value),
                // Unreachable: every condition field is in `required`
                _ => false,
            }
        });
        Some(bad)
    }
}
