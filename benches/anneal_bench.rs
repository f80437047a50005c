//! Criterion benchmarks for the annealing loop and the parallel search.
//!
//! Instances are points on a circle, so the optimum is known and the
//! work per iteration grows linearly with the node count.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_anneal_tsp::anneal::{AnnealConfig, AnnealRun};
use u_anneal_tsp::cost::{tour_cost, CostMatrix, Point};
use u_anneal_tsp::io::MemorySink;
use u_anneal_tsp::parallel::{ParallelConfig, ParallelCoordinator};
use u_anneal_tsp::random::create_rng;
use u_anneal_tsp::tour::random_permutation;

fn circle(n: usize) -> CostMatrix {
    let points: Vec<Point> = (0..n)
        .map(|i| {
            let a = i as f64 * std::f64::consts::TAU / n as f64;
            Point::new(i as i64, 100.0 * a.cos(), 100.0 * a.sin())
        })
        .collect();
    CostMatrix::from_points(&points).expect("non-empty instance")
}

// ===========================================================================
// Cost evaluation
// ===========================================================================

fn bench_tour_cost(c: &mut Criterion) {
    let mut group = c.benchmark_group("tour_cost");

    for &n in &[52, 200, 1000] {
        let matrix = circle(n);
        let tour = random_permutation(n, &mut create_rng(42));
        group.bench_with_input(BenchmarkId::from_parameter(n), &(matrix, tour), |b, (m, t)| {
            b.iter(|| black_box(tour_cost(black_box(t.as_slice()), m)))
        });
    }
    group.finish();
}

// ===========================================================================
// Single run
// ===========================================================================

fn bench_single_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("anneal_run");
    group.sample_size(10);

    for &n in &[20, 52, 100] {
        let matrix = circle(n);
        let start = random_permutation(n, &mut create_rng(42));
        let config = AnnealConfig::default().with_alpha(0.999).with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(start, config), |b, (s, cfg)| {
            b.iter(|| {
                let run = AnnealRun::new(&matrix, s.clone(), 1000.0, cfg).expect("valid run");
                black_box(run.run())
            })
        });
    }
    group.finish();
}

// ===========================================================================
// Parallel search
// ===========================================================================

fn bench_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_search");
    group.sample_size(10);

    for &n in &[20, 52] {
        let matrix = circle(n);
        let start = random_permutation(n, &mut create_rng(42));
        let config = ParallelConfig::default()
            .with_cooling_factors(vec![0.998, 0.9982, 0.9984, 0.9986, 0.9988, 0.999])
            .with_seed(42);
        let coordinator = ParallelCoordinator::new(config);
        group.bench_with_input(BenchmarkId::from_parameter(n), &start, |b, s| {
            b.iter(|| {
                let result = coordinator
                    .run(&matrix, s.clone(), &MemorySink::new())
                    .expect("valid search");
                black_box(result.best_cost)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tour_cost, bench_single_run, bench_parallel);
criterion_main!(benches);
