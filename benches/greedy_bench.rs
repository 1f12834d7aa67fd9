//! Criterion benchmarks for the greedy heuristics.
//!
//! Measures per-run cost of each algorithm on the Rastrigin function at
//! a few dimensionalities with small budgets.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_greedy::greedy::{GreedyConfig, GreedyRunner};
use u_greedy::multistart::{MultiStartConfig, MultiStartRunner};
use u_greedy::neighborhood::{sample_batch, Perturbation};
use u_greedy::objective::rastrigin;
use u_greedy::random::create_rng;
use u_greedy::vng::{VngConfig, VngRunner};

fn bench_objective(c: &mut Criterion) {
    let mut group = c.benchmark_group("rastrigin");

    for &dim in &[3usize, 30, 300] {
        let x: Vec<f64> = (0..dim).map(|i| i as f64 * 0.01).collect();
        group.bench_with_input(BenchmarkId::from_parameter(dim), &x, |b, x| {
            b.iter(|| black_box(rastrigin(black_box(x))))
        });
    }
    group.finish();
}

fn bench_sampler(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_batch");
    let reference = vec![0.0; 10];

    for perturbation in Perturbation::ALL {
        let mut rng = create_rng(Some(42));
        group.bench_function(perturbation.name(), |b| {
            b.iter(|| {
                let batch = sample_batch(&reference, 10, perturbation, 1.0, &mut rng);
                black_box(batch)
            })
        });
    }
    group.finish();
}

fn bench_greedy(c: &mut Criterion) {
    let mut group = c.benchmark_group("basic_greedy");
    group.sample_size(10);

    for &dim in &[3usize, 5, 10] {
        let config = GreedyConfig::new(dim).with_max_iterations(1000).with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(dim), &config, |b, c| {
            b.iter(|| black_box(GreedyRunner::run(black_box(c))))
        });
    }
    group.finish();
}

fn bench_multi_start(c: &mut Criterion) {
    let mut group = c.benchmark_group("multi_start_greedy");
    group.sample_size(10);

    for &dim in &[3usize, 5, 10] {
        let config = MultiStartConfig::new(dim).with_max_starts(100).with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(dim), &config, |b, c| {
            b.iter(|| black_box(MultiStartRunner::run(black_box(c))))
        });
    }
    group.finish();
}

fn bench_vng(c: &mut Criterion) {
    let mut group = c.benchmark_group("variable_neighborhood_greedy");
    group.sample_size(10);

    for &dim in &[3usize, 5, 10] {
        let config = VngConfig::new(dim).with_max_iterations(1000).with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(dim), &config, |b, c| {
            b.iter(|| black_box(VngRunner::run(black_box(c))))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_objective,
    bench_sampler,
    bench_greedy,
    bench_multi_start,
    bench_vng
);
criterion_main!(benches);
