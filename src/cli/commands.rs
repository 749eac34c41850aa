use chrono::{Datelike, NaiveDate};
use serde_json::json;
use validator::Validate;

use crate::analyzers::RiskAnalyzer;
use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::models::{BoundKind, Location, RiskReport, RuleTable};
use crate::providers::{
    ClimateProvider, PowerClient, PowerConfig, SyntheticConfig, SyntheticProvider,
};

pub async fn run(cli: Cli) -> Result<()> {
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    match cli.command {
        Commands::Assess {
            lat,
            lon,
            date,
            activity,
            synthetic,
            min_years,
            sample,
        } => {
            let location = Location::new(lat, lon);
            location.validate()?;

            let target = NaiveDate::parse_from_str(&date, "%Y-%m-%d")?;
            let (month, day) = (target.month(), target.day());

            let provider: Box<dyn ClimateProvider> = if synthetic {
                Box::new(SyntheticProvider::new(SyntheticConfig::default()))
            } else {
                Box::new(PowerClient::new(PowerConfig::default())?)
            };

            let series = provider.fetch_daily_series(location, month, day).await?;
            let analyzer = RiskAnalyzer::new().with_min_valid_years(min_years);

            let query = format!(
                "({:.2}, {:.2}) on {:02}-{:02}",
                location.latitude, location.longitude, month, day
            );

            let mut response = match activity {
                Some(name) => {
                    let result = analyzer.evaluate_by_name(&series, &name)?;
                    json!({
                        "query": query,
                        "activity": name,
                        "risk_percentage": result.risk_percentage,
                        "valid_years": result.valid_years,
                        "total_years_analyzed": series.len(),
                    })
                }
                None => {
                    let probabilities = analyzer.evaluate_all(&series)?;
                    let report = RiskReport::new(series.len(), probabilities);
                    json!({
                        "query": query,
                        "probabilities": report.percentage_labels(),
                        "total_years_analyzed": report.total_years_analyzed,
                    })
                }
            };

            if sample > 0 {
                let preview: Vec<_> = series.iter().take(sample).collect();
                response["raw_data_sample"] = serde_json::to_value(preview)?;
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }

        Commands::Activities => {
            let table = RuleTable::shared();
            println!("Registered activities ({}):", table.len());
            for activity in table.activities() {
                println!("\n{activity}: bad when any of");
                for condition in table.get(activity)?.conditions() {
                    let direction = match condition.kind {
                        BoundKind::Min => "below",
                        BoundKind::Max => "above",
                    };
                    println!(
                        "  {} {} {}",
                        condition.field.as_str(),
                        direction,
                        condition.bound
                    );
                }
            }
        }
    }

    Ok(())
}
