use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nb_core::newton;
use nb_core::GridParams;

criterion_main!(benches);
criterion_group!(benches, bench_classify, bench_grid);

/// Benchmark a single classification, away from the basin boundary.
pub fn bench_classify(c: &mut Criterion) {
    c.bench_function("classify", |b| {
        b.iter(|| newton::classify(black_box(0.75), black_box(0.3)))
    });
}

/// Benchmark the default grid, sequentially and across thread-pool sizes.
pub fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");
    let params = GridParams::default();

    // Count sample points:
    group.throughput(criterion::Throughput::Elements(
        (params.samples * params.samples) as u64,
    ));
    // Don't spend too long preparing:
    group.warm_up_time(Duration::from_secs(1));

    group.bench_function("sequential", |b| {
        b.iter(|| newton::evaluate(black_box(&params), newton::MAX_ITERATIONS))
    });

    // Count up powers of two:
    let thread_range = (0..).map(|x| 1 << x).take_while({
        let x = num_cpus::get().next_power_of_two();
        move |y| (*y <= x)
    });
    for threads in thread_range {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .unwrap();
        group.bench_with_input(
            BenchmarkId::new("parallel", threads),
            &params,
            |b, params| {
                b.iter(|| {
                    pool.install(|| {
                        newton::evaluate_parallel(black_box(params), newton::MAX_ITERATIONS)
                    })
                })
            },
        );
    }

    group.finish();
}
