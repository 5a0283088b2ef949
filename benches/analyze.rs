//! Benchmarks for full-event analysis

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use line_scout::chart;
use line_scout::engine::AnalyticsEngine;
use line_scout::quote::{MarketType, Quote, Side};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// A day of quotes: 200 observations per market/selection pair.
fn synthetic_day() -> Vec<Quote> {
    let base = Utc.with_ymd_and_hms(2025, 11, 20, 8, 0, 0).unwrap();
    let mut quotes = Vec::new();

    for i in 0..200i64 {
        let ts = Some(base + Duration::minutes(i * 3));
        let drift = Decimal::from(i) / dec!(40);

        quotes.push(Quote::new(
            ts,
            MarketType::Spread,
            Some(Side::Home),
            Some("TeamA".to_string()),
            dec!(-110) - Decimal::from(i % 12),
            Some(dec!(-3.0) - drift),
        ));
        quotes.push(Quote::new(
            ts,
            MarketType::Spread,
            Some(Side::Away),
            Some("TeamB".to_string()),
            dec!(-110) + Decimal::from(i % 9),
            Some(dec!(3.0) + drift),
        ));
        quotes.push(Quote::new(
            ts,
            MarketType::Total,
            Some(Side::Over),
            None,
            dec!(-105) - Decimal::from(i % 7),
            Some(dec!(210.0) + drift),
        ));
        quotes.push(Quote::new(
            ts,
            MarketType::Total,
            Some(Side::Under),
            None,
            dec!(-115) + Decimal::from(i % 5),
            Some(dec!(210.0) + drift),
        ));
        quotes.push(Quote::new(
            ts,
            MarketType::Moneyline,
            Some(Side::Home),
            Some("TeamA".to_string()),
            dec!(-150) - Decimal::from(i % 20),
            None,
        ));
        quotes.push(Quote::new(
            ts,
            MarketType::Moneyline,
            Some(Side::Away),
            Some("TeamB".to_string()),
            dec!(130) + Decimal::from(i % 15),
            None,
        ));
    }

    quotes
}

fn benchmark_analyze_all(c: &mut Criterion) {
    let engine = AnalyticsEngine::with_defaults(synthetic_day());

    c.bench_function("analyze_all", |b| {
        b.iter(|| black_box(engine.analyze_all()))
    });
}

fn benchmark_engine_build(c: &mut Criterion) {
    let quotes = synthetic_day();

    c.bench_function("engine_build", |b| {
        b.iter(|| AnalyticsEngine::with_defaults(black_box(quotes.clone())))
    });
}

fn benchmark_movement_series(c: &mut Criterion) {
    let quotes = synthetic_day();

    c.bench_function("movement_series_spread", |b| {
        b.iter(|| chart::movement_series(black_box(&quotes), MarketType::Spread, Some("TeamA")))
    });
}

criterion_group!(
    benches,
    benchmark_analyze_all,
    benchmark_engine_build,
    benchmark_movement_series
);
criterion_main!(benches);
