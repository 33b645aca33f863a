//! Criterion benchmarks for map generation, the MST lower bound, and
//! annealing batches.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mtsp_anneal::bound::lower_bound;
use mtsp_anneal::problem::{MapParams, ProblemState};
use mtsp_anneal::workbench::Workbench;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ===========================================================================
// Map generation: rejection-sampled distinct cities + round-robin deal
// ===========================================================================

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for &num_cities in &[50usize, 150, 300] {
        let params = MapParams::default().with_num_cities(num_cities);
        group.bench_with_input(
            BenchmarkId::from_parameter(num_cities),
            &params,
            |b, params| {
                let mut rng = StdRng::seed_from_u64(42);
                b.iter(|| ProblemState::generate(black_box(params), &mut rng).unwrap());
            },
        );
    }
    group.finish();
}

// ===========================================================================
// Lower bound: dense O(n^2) Prim over the full city set
// ===========================================================================

fn bench_lower_bound(c: &mut Criterion) {
    let mut group = c.benchmark_group("lower_bound");
    for &num_cities in &[50usize, 150, 300] {
        let params = MapParams::default().with_num_cities(num_cities);
        let mut rng = StdRng::seed_from_u64(7);
        let state = ProblemState::generate(&params, &mut rng).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(num_cities),
            &state,
            |b, state| {
                b.iter(|| lower_bound(black_box(state.cities()), 3));
            },
        );
    }
    group.finish();
}

// ===========================================================================
// Annealing: 100-step batches against the default 3-tour map
// ===========================================================================

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_batch");
    for objective_index in 0..3usize {
        group.bench_with_input(
            BenchmarkId::from_parameter(objective_index),
            &objective_index,
            |b, &objective_index| {
                let mut bench = Workbench::seeded(MapParams::default(), 42).unwrap();
                b.iter(|| bench.run_batch(objective_index, 100).unwrap());
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_lower_bound, bench_batch);
criterion_main!(benches);
