use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use weather_odds::analyzers::RiskAnalyzer;
use weather_odds::models::{Activity, DailyObservation};

// Create a climate-shaped series for benchmarking
fn create_test_series(years: usize) -> Vec<DailyObservation> {
    (0..years)
        .map(|offset| {
            let year = 1984 + offset as i32;
            let temperature = 18.0 + (offset % 17) as f64 - 4.0;
            let precipitation = (offset % 13) as f64;
            let wind_speed = 2.0 + (offset % 11) as f64;
            // Sprinkle sentinel gaps the way reanalysis records have them
            if offset % 9 == 0 {
                DailyObservation::new(year, -999.0, precipitation, wind_speed)
            } else {
                DailyObservation::new(year, temperature, precipitation, wind_speed)
                    .with_humidity(70.0 + (offset % 25) as f64)
            }
        })
        .collect()
}

fn benchmark_single_activity(c: &mut Criterion) {
    let series = create_test_series(100);
    let analyzer = RiskAnalyzer::new();

    c.bench_function("evaluate_beach_100y", |b| {
        b.iter(|| {
            let result = analyzer.evaluate(black_box(&series), Activity::Beach);
            black_box(result.unwrap().risk_percentage)
        })
    });
}

fn benchmark_all_activities(c: &mut Criterion) {
    let series = create_test_series(100);
    let analyzer = RiskAnalyzer::new();

    c.bench_function("evaluate_all_100y", |b| {
        b.iter(|| {
            let results = analyzer.evaluate_all(black_box(&series));
            black_box(results.unwrap().len())
        })
    });
}

fn benchmark_varying_series_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_all_by_years");
    let analyzer = RiskAnalyzer::new().with_min_valid_years(10);

    for &years in &[20, 40, 100, 500] {
        group.bench_with_input(BenchmarkId::new("years", years), &years, |b, &years| {
            let series = create_test_series(years);
            b.iter(|| {
                let results = analyzer.evaluate_all(black_box(&series));
                black_box(results.unwrap().len())
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_activity,
    benchmark_all_activities,
    benchmark_varying_series_length
);
criterion_main!(benches);
