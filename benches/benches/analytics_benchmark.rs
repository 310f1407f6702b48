//! Analytics benchmarks over synthetic ticket feeds.
//!
//! Run with: `cargo bench --package fareline-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fareline_bench::{pinned_resolver, synthetic_feed};
use fareline_lib::prelude::*;
use std::hint::black_box;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn parse_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for size in SIZES {
        let feed = synthetic_feed(size);
        group.throughput(Throughput::Bytes(feed.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &feed, |b, feed| {
            b.iter(|| fareline_lib::parse_feed(black_box(feed), "bench").unwrap());
        });
    }

    group.finish();
}

fn durations_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimal_durations");
    let aggregator = CarrierMinimumAggregator::new(DurationCalculator::new(pinned_resolver()));

    for size in SIZES {
        let tickets = Source::inline(synthetic_feed(size)).read().unwrap();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &tickets, |b, tickets| {
            b.iter(|| {
                aggregator
                    .minimal_durations_by_carrier(black_box(tickets.as_slice()), "VVO", "TLV")
                    .unwrap()
            });
        });
    }

    group.finish();
}

fn prices_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("prices");

    for size in SIZES {
        let tickets = Source::inline(synthetic_feed(size)).read().unwrap();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("mean", size), &tickets, |b, tickets| {
            b.iter(|| mean(black_box(tickets)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("median", size), &tickets, |b, tickets| {
            b.iter(|| median(black_box(tickets)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    parse_benchmark,
    durations_benchmark,
    prices_benchmark
);
criterion_main!(benches);
