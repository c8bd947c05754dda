//! Criterion benchmarks for the evolutionary engine.
//!
//! Uses synthetic objectives (Schaffer F6, sphere) to measure engine
//! overhead independent of any real problem.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use evobit::{Engine, GaConfig};

fn schaffer_f6(x: &[f64]) -> f64 {
    let sum_sq: f64 = x.iter().map(|v| v * v).sum();
    0.5 + (sum_sq.sqrt().sin().powi(2) - 0.5) / (1.0 + 0.001 * sum_sq).powi(2)
}

fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|v| v * v).sum()
}

fn bench_schaffer_f6(c: &mut Criterion) {
    let mut group = c.benchmark_group("schaffer_f6");
    group.sample_size(10);

    for (pop, gens) in [(100usize, 100usize), (100, 500), (200, 500)] {
        let config = GaConfig::default()
            .with_population_size(pop)
            .with_generations(gens)
            .with_elite_size(pop / 5)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("p{}_g{}", pop, gens), gens),
            &config,
            |b, config| {
                b.iter(|| {
                    let mut engine =
                        Engine::new(black_box(config.clone()), schaffer_f6).unwrap();
                    black_box(engine.run())
                })
            },
        );
    }
    group.finish();
}

fn bench_sphere_dimensionality(c: &mut Criterion) {
    let mut group = c.benchmark_group("sphere_dim");
    group.sample_size(10);

    for &dim in &[2usize, 10, 50] {
        let config = GaConfig::default()
            .with_dimensionality(dim)
            .with_population_size(100)
            .with_generations(100)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(dim), &config, |b, config| {
            b.iter(|| {
                let mut engine = Engine::new(black_box(config.clone()), sphere).unwrap();
                black_box(engine.run())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_schaffer_f6, bench_sphere_dimensionality);
criterion_main!(benches);
