use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RiskError};
use crate::models::activity::Activity;
use crate::models::observation::ObservationField;

/// Direction of a threshold bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundKind {
    /// Values below the bound violate the condition.
    Min,
    /// Values above the bound violate the condition.
    Max,
}

/// One named-field bound condition of an activity rule set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub field: ObservationField,
    pub kind: BoundKind,
    pub bound: f64,
}

impl Condition {
    pub fn min(field: ObservationField, bound: f64) -> Self {
        Self {
            field,
            kind: BoundKind::Min,
            bound,
        }
    }

    pub fn max(field: ObservationField, bound: f64) -> Self {
        Self {
            field,
            kind: BoundKind::Max,
            bound,
        }
    }

    /// Strict-inequality comparison: a value exactly at the bound is
    /// acceptable. This boundary semantics is load-bearing and must not be
    /// relaxed to `>=`/`<=`.
    pub fn is_violated_by(&self, value: f64) -> bool {
        match self.kind {
            BoundKind::Min => value < self.bound,
            BoundKind::Max => value > self.bound,
        }
    }
}

/// The conjunction of conditions defining one activity's risk. A day is bad
/// when ANY condition is violated.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RuleSet {
    conditions: Vec<Condition>,
}

impl RuleSet {
    pub fn new(conditions: Vec<Condition>) -> Self {
        Self { conditions }
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Distinct observation fields this rule set inspects, in rule order.
    /// Drives missing-data filtering: a sentinel in any of these fields
    /// disqualifies the year, a sentinel elsewhere does not.
    pub fn required_fields(&self) -> Vec<ObservationField> {
        let mut fields = Vec::new();
        for condition in &self.conditions {
            if !fields.contains(&condition.field) {
                fields.push(condition.field);
            }
        }
        fields
    }
}

/// Mapping from activity to its rule set. Data, not code: new activities or
/// thresholds extend the table without touching the evaluator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleTable {
    rules: BTreeMap<Activity, RuleSet>,
}

static DEFAULT_TABLE: OnceLock<RuleTable> = OnceLock::new();

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The canonical threshold set (units: °C, mm/day, m/s).
    pub fn with_defaults() -> Self {
        use ObservationField::{Precipitation, Temperature, WindSpeed};

        let mut table = Self::new();
        table.insert(
            Activity::Beach,
            RuleSet::new(vec![
                Condition::min(Temperature, 24.0),
                Condition::max(Precipitation, 5.0),
                Condition::max(WindSpeed, 10.0),
            ]),
        );
        table.insert(
            Activity::Skiing,
            RuleSet::new(vec![
                Condition::max(Temperature, 0.0),
                Condition::max(Precipitation, 1.0),
                Condition::max(WindSpeed, 15.0),
            ]),
        );
        table.insert(
            Activity::Hiking,
            RuleSet::new(vec![
                Condition::max(Temperature, 30.0),
                Condition::max(Precipitation, 10.0),
                Condition::max(WindSpeed, 20.0),
            ]),
        );
        table.insert(
            Activity::Fishing,
            RuleSet::new(vec![
                Condition::max(Precipitation, 10.0),
                Condition::max(WindSpeed, 15.0),
            ]),
        );
        table.insert(
            Activity::Festival,
            RuleSet::new(vec![
                Condition::max(Temperature, 32.0),
                Condition::max(Precipitation, 5.0),
                Condition::max(WindSpeed, 15.0),
            ]),
        );
        table
    }

    /// Process-wide immutable default table, built once.
    pub fn shared() -> &'static RuleTable {
        DEFAULT_TABLE.get_or_init(RuleTable::with_defaults)
    }

    pub fn insert(&mut self, activity: Activity, rules: RuleSet) {
        self.rules.insert(activity, rules);
    }

    pub fn get(&self, activity: Activity) -> Result<&RuleSet> {
        self.rules
            .get(&activity)
            .ok_or_else(|| RiskError::UnknownActivity(activity.to_string()))
    }

    /// Lookup by external name; unregistered names surface `UnknownActivity`
    /// rather than falling back to an empty always-good rule set.
    pub fn get_by_name(&self, name: &str) -> Result<(Activity, &RuleSet)> {
        let activity: Activity = name.parse()?;
        Ok((activity, self.get(activity)?))
    }

    pub fn activities(&self) -> impl Iterator<Item = Activity> + '_ {
        self.rules.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
