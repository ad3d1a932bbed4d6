//! Benchmarks for the producer interval aggregation
//!
//! Run with: cargo bench --package awards
//!
//! Uses 10,000 synthetic winners spread over 50 producers.

use awards::{IntervalAggregator, producer_intervals};
use catalogue::{Catalogue, MovieRecord};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::sync::Arc;

fn synthetic_catalogue(total: i32) -> Catalogue {
    let records = (0..total)
        .map(|index| {
            MovieRecord::new(
                1980 + index,
                format!("Movie {index}"),
                "Studio",
                format!("Producer {}", index % 50),
                true,
            )
        })
        .collect();
    Catalogue::from_records(records)
}

fn bench_producer_intervals(c: &mut Criterion) {
    let catalogue = synthetic_catalogue(10_000);
    let winners = catalogue.find_winner_movies();

    c.bench_function("producer_intervals_10k_winners", |b| {
        b.iter(|| {
            let result = producer_intervals(black_box(&winners));
            black_box(result)
        })
    });
}

fn bench_aggregator(c: &mut Criterion) {
    let aggregator = IntervalAggregator::new(Arc::new(synthetic_catalogue(10_000)));

    c.bench_function("aggregator_with_snapshot_10k_winners", |b| {
        b.iter(|| black_box(aggregator.producer_intervals()))
    });
}

criterion_group!(benches, bench_producer_intervals, bench_aggregator);
criterion_main!(benches);
