use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::activity::Activity;

/// Bad-day odds for one activity over the valid historical record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskResult {
    /// Share of valid years classified bad, rounded to the nearest integer.
    pub risk_percentage: u8,
    /// Denominator after missing-data filtering, not the raw series length.
    pub valid_years: usize,
}

impl RiskResult {
    pub fn new(risk_percentage: u8, valid_years: usize) -> Self {
        debug_assert!(risk_percentage <= 100);
        Self {
            risk_percentage,
            valid_years,
        }
    }

    /// Display form used on the wire, e.g. `"60%"`.
    pub fn percentage_label(&self) -> String {
        format!("{}%", self.risk_percentage)
    }
}

/// All-activities result for one (location, month, day) query. Ephemeral,
/// computed per request and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    /// Raw series length before filtering.
    pub total_years_analyzed: usize,
    pub probabilities: BTreeMap<Activity, RiskResult>,
}

impl RiskReport {
    pub fn new(total_years_analyzed: usize, probabilities: BTreeMap<Activity, RiskResult>) -> Self {
        Self {
            total_years_analyzed,
            probabilities,
        }
    }

    /// Activity-name keyed percentage labels for the response body.
    pub fn percentage_labels(&self) -> BTreeMap<&'static str, String> {
        self.probabilities
            .iter()
            .map(|(activity, result)| (activity.as_str(), result.percentage_label()))
            .collect()
    }

    pub fn summary(&self) -> String {
        let mut lines = vec![format!(
            "Historical record: {} years analyzed",
            self.total_years_analyzed
        )];
        for (activity, result) in &self.probabilities {
            lines.push(format!(
                "  {:<10} {:>4}  ({} valid years)",
                activity.to_string(),
                result.percentage_label(),
                result.valid_years
            ));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_label() {
        assert_eq!(RiskResult::new(60, 40).percentage_label(), "60%");
        assert_eq!(RiskResult::new(0, 25).percentage_label(), "0%");
    }

    #[test]
    fn test_report_labels() {
        let mut probabilities = BTreeMap::new();
        probabilities.insert(Activity::Beach, RiskResult::new(25, 20));
        probabilities.insert(Activity::Fishing, RiskResult::new(5, 22));

        let report = RiskReport::new(22, probabilities);
        let labels = report.percentage_labels();
        assert_eq!(labels["Beach"], "25%");
        assert_eq!(labels["Fishing"], "5%");
        assert!(report.summary().contains("22 years"));
    }
}
