//! Benchmarks comparing Eytzinger search against sorted-slice binary search.
//!
//! Run with: cargo bench
//!
//! Both sides search the same key set with the same pre-generated targets.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use nexus_eytzinger::BoxedEytzinger;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const LOOKUPS: usize = 10_000;

/// Sizes from L1-resident to well past L3.
const SIZES: [usize; 4] = [1 << 10, 1 << 14, 1 << 18, 1 << 22];

fn make_targets(len: usize, seed: u64) -> Vec<u64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..LOOKUPS)
        .map(|_| rng.random_range(0..(len as u64 * 2)))
        .collect()
}

// ============================================================================
// Lower bound
// ============================================================================

fn bench_lower_bound(c: &mut Criterion) {
    let mut group = c.benchmark_group("lower_bound");
    group.throughput(Throughput::Elements(LOOKUPS as u64));

    for len in SIZES {
        let sorted: Vec<u64> = (0..len as u64).map(|i| i * 2).collect();
        let eytzinger = BoxedEytzinger::new(sorted.clone());
        let targets = make_targets(len, 12345);

        group.bench_with_input(BenchmarkId::new("eytzinger", len), &targets, |b, targets| {
            b.iter(|| {
                let mut hits = 0usize;
                for t in targets {
                    hits += black_box(eytzinger.find(t)).is_some() as usize;
                }
                hits
            });
        });

        group.bench_with_input(
            BenchmarkId::new("partition_point", len),
            &targets,
            |b, targets| {
                b.iter(|| {
                    let mut hits = 0usize;
                    for t in targets {
                        hits += (black_box(sorted.partition_point(|x| x < t)) < len) as usize;
                    }
                    hits
                });
            },
        );
    }

    group.finish();
}

// ============================================================================
// Exact match
// ============================================================================

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains");
    group.throughput(Throughput::Elements(LOOKUPS as u64));

    for len in SIZES {
        let sorted: Vec<u64> = (0..len as u64).map(|i| i * 2).collect();
        let eytzinger = BoxedEytzinger::new(sorted.clone());
        let targets = make_targets(len, 99999);

        group.bench_with_input(BenchmarkId::new("eytzinger", len), &targets, |b, targets| {
            b.iter(|| {
                let mut hits = 0usize;
                for t in targets {
                    hits += black_box(eytzinger.contains(t)) as usize;
                }
                hits
            });
        });

        group.bench_with_input(
            BenchmarkId::new("binary_search", len),
            &targets,
            |b, targets| {
                b.iter(|| {
                    let mut hits = 0usize;
                    for t in targets {
                        hits += black_box(sorted.binary_search(t).is_ok()) as usize;
                    }
                    hits
                });
            },
        );
    }

    group.finish();
}

// ============================================================================
// Construction
// ============================================================================

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for len in [1 << 10, 1 << 16] {
        let mut rng = SmallRng::seed_from_u64(7);
        let input: Vec<u64> = (0..len).map(|_| rng.random()).collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("eytzinger", len), &input, |b, input| {
            b.iter_batched(
                || input.clone(),
                |input| BoxedEytzinger::new(input),
                criterion::BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("sort_unstable", len), &input, |b, input| {
            b.iter_batched(
                || input.clone(),
                |mut input| {
                    input.sort_unstable();
                    input
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lower_bound, bench_contains, bench_build);

criterion_main!(benches);
