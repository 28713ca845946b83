use chiaro::examples::{islands, mirrors};
use chiaro::puzzle::Rule;
use chiaro::solver::solve;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn corridor_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Corridor Performance");

    for size in [4, 5, 6].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let puzzle = islands::corridor(size, size);
            b.iter(|| {
                let (solution, _stats) = solve(black_box(&puzzle)).unwrap();
                assert!(solution.is_some());
            });
        });
    }
    group.finish();
}

fn islands_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Islands Performance");

    let puzzle = islands::islands(5, 5, 3);
    group.bench_function("5x5, island size 3", |b| {
        b.iter(|| {
            let (solution, _stats) = solve(black_box(&puzzle)).unwrap();
            assert!(solution.is_some());
        })
    });

    group.finish();
}

fn underclued_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Underclued Performance");

    // One core solve per colour query, so this stresses the meta-solver.
    let mut puzzle = mirrors::pinned_row(6);
    puzzle.add_rule(Rule::Underclued);
    group.bench_function("pinned row of 6", |b| {
        b.iter(|| {
            let (solution, _stats) = solve(black_box(&puzzle)).unwrap();
            assert!(solution.is_some());
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    corridor_benchmark,
    islands_benchmark,
    underclued_benchmark
);
criterion_main!(benches);
