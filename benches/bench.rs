use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use silences::{find_silences, generate_random_samples, naive::find_silences_naive};
use std::time::Duration;

/// Benchmark the queue against the brute-force scan for growing windows.
fn bench(c: &mut Criterion) {
    let samples = &generate_random_samples(1000000, 4, 213456);
    let maxnoise = 3;

    let mut g = c.benchmark_group("g");
    for reqlength in [4, 16, 64] {
        g.bench_with_input(
            BenchmarkId::new("queue", reqlength),
            &reqlength,
            |b, &reqlength| b.iter(|| find_silences(samples, reqlength, maxnoise)),
        );
        g.bench_with_input(
            BenchmarkId::new("naive", reqlength),
            &reqlength,
            |b, &reqlength| b.iter(|| find_silences_naive(samples, reqlength, maxnoise)),
        );
    }
    g.finish();
}

criterion_group!(
    name = group;
    config = Criterion::default()
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_millis(2000))
        .sample_size(10);
    targets = bench
);

criterion_main!(group);
