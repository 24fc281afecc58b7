//! Criterion benchmarks for headless driver runs.
//!
//! Measures the cost of the stepping machinery itself: no pause, frames
//! discarded. Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use sortviz::{Algorithm, NoDelay, NullSink, RunControl, Speed, Stepper};

/// Generate random test data of given size
fn generate_random_data(size: usize) -> Vec<u32> {
    let mut rng = rand::thread_rng();
    (0..size).map(|_| rng.gen_range(1..=1000)).collect()
}

fn run_headless(algorithm: Algorithm, data: &mut [u32]) {
    let speed = Speed::from_millis(0);
    let control = RunControl::new();
    let mut stepper: Stepper<'_, u32> = Stepper::new(&NullSink, &NoDelay, &speed, &control);
    algorithm.run(data, &mut stepper);
}

fn bench_drivers(c: &mut Criterion) {
    for algorithm in Algorithm::ALL {
        if algorithm == Algorithm::Bogo {
            continue;
        }
        let mut group = c.benchmark_group(algorithm.slug());

        for size in [64usize, 256, 1024] {
            group.throughput(Throughput::Elements(size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
                b.iter_batched(
                    || generate_random_data(size),
                    |mut data| {
                        run_headless(algorithm, black_box(&mut data));
                        data
                    },
                    criterion::BatchSize::SmallInput,
                )
            });
        }

        group.finish();
    }
}

fn bench_bogo(c: &mut Criterion) {
    let mut group = c.benchmark_group(Algorithm::Bogo.slug());
    for size in [4usize, 6] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || generate_random_data(size),
                |mut data| {
                    run_headless(Algorithm::Bogo, black_box(&mut data));
                    data
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_drivers, bench_bogo);
criterion_main!(benches);
