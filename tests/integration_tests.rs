use pretty_assertions::assert_eq;
use weather_odds::analyzers::RiskAnalyzer;
use weather_odds::error::RiskError;
use weather_odds::models::{Activity, DailyObservation, Location, RiskReport};
use weather_odds::providers::{ClimateProvider, SyntheticConfig, SyntheticProvider};

#[tokio::test]
async fn test_synthetic_series_through_engine() {
    let provider = SyntheticProvider::new(SyntheticConfig::default());
    let location = Location::new(25.76, -80.19); // Miami
    let series = provider.fetch_daily_series(location, 7, 15).await.unwrap();
    assert_eq!(series.len(), 40);

    let analyzer = RiskAnalyzer::new();
    let probabilities = analyzer.evaluate_all(&series).unwrap();
    assert_eq!(probabilities.len(), Activity::ALL.len());

    for (activity, result) in &probabilities {
        assert!(
            result.risk_percentage <= 100,
            "{activity} reported {}",
            result.risk_percentage
        );
        assert_eq!(result.valid_years, 40);
    }

    // A Miami July is hopeless for skiing
    assert_eq!(probabilities[&Activity::Skiing].risk_percentage, 100);
}

#[tokio::test]
async fn test_single_activity_matches_bulk_path() {
    let provider = SyntheticProvider::new(SyntheticConfig::default());
    let location = Location::new(50.45, 30.52); // Kyiv
    let series = provider.fetch_daily_series(location, 9, 1).await.unwrap();

    let analyzer = RiskAnalyzer::new();
    let bulk = analyzer.evaluate_all(&series).unwrap();
    for activity in Activity::ALL {
        let single = analyzer.evaluate(&series, activity).unwrap();
        assert_eq!(bulk[&activity], single);
    }
}

#[tokio::test]
async fn test_report_wire_shape() {
    let provider = SyntheticProvider::new(SyntheticConfig::default());
    let location = Location::new(50.45, 30.52);
    let series = provider.fetch_daily_series(location, 7, 15).await.unwrap();

    let probabilities = RiskAnalyzer::new().evaluate_all(&series).unwrap();
    let report = RiskReport::new(series.len(), probabilities);

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["total_years_analyzed"], 40);
    assert!(value["probabilities"]["Beach"]["risk_percentage"].is_u64());

    for (name, label) in report.percentage_labels() {
        assert!(label.ends_with('%'), "{name} label not percent-formatted");
    }
}

#[tokio::test]
async fn test_short_record_is_refused() {
    let provider = SyntheticProvider::new(SyntheticConfig {
        years: 10,
        ..SyntheticConfig::default()
    });
    let location = Location::new(50.45, 30.52);
    let series = provider.fetch_daily_series(location, 7, 15).await.unwrap();

    let err = RiskAnalyzer::new()
        .evaluate(&series, Activity::Beach)
        .unwrap_err();
    assert!(matches!(
        err,
        RiskError::InsufficientData {
            valid_years: 10,
            required_years: 20,
        }
    ));
}

#[test]
fn test_unknown_activity_is_surfaced() {
    let series: Vec<DailyObservation> = (1984..2014)
        .map(|year| DailyObservation::new(year, 20.0, 2.0, 5.0))
        .collect();

    let err = RiskAnalyzer::new()
        .evaluate_by_name(&series, "Surfing")
        .unwrap_err();
    assert!(matches!(err, RiskError::UnknownActivity(_)));
}
