use criterion::{criterion_group, criterion_main, Criterion};
use crucible_lib::{load_grid, plan_both, plan_route, CostGrid, PolicyKind, RouteRequest};
use once_cell::sync::Lazy;
use std::hint::black_box;
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/reference_grid.txt")
}

static REFERENCE: Lazy<CostGrid> = Lazy::new(|| load_grid(&fixture_path()).expect("fixture loads"));

/// Deterministic pseudo-random 141x141 grid, the size of a full puzzle input.
static LARGE: Lazy<CostGrid> = Lazy::new(|| {
    let size = 141;
    let mut seed: u32 = 0x2545_f491;
    let rows = (0..size)
        .map(|_| {
            (0..size)
                .map(|_| {
                    seed ^= seed << 13;
                    seed ^= seed >> 17;
                    seed ^= seed << 5;
                    seed % 9 + 1
                })
                .collect()
        })
        .collect();
    CostGrid::from_rows(rows).expect("generated grid is rectangular")
});

fn benchmark_search(c: &mut Criterion) {
    c.bench_function("bounded_reference", |b| {
        let grid = &*REFERENCE;
        let request = RouteRequest::corner_to_corner(grid, PolicyKind::Bounded);
        b.iter(|| {
            let plan = plan_route(grid, &request).expect("search runs");
            black_box(plan.heat_loss)
        });
    });

    c.bench_function("committed_reference", |b| {
        let grid = &*REFERENCE;
        let request = RouteRequest::corner_to_corner(grid, PolicyKind::Committed);
        b.iter(|| {
            let plan = plan_route(grid, &request).expect("search runs");
            black_box(plan.heat_loss)
        });
    });

    let mut group = c.benchmark_group("large_grid");
    group.sample_size(10);
    group.bench_function("bounded_141", |b| {
        let grid = &*LARGE;
        let request = RouteRequest::corner_to_corner(grid, PolicyKind::Bounded);
        b.iter(|| black_box(plan_route(grid, &request).expect("search runs").heat_loss));
    });
    group.bench_function("both_141", |b| {
        let grid = &*LARGE;
        let request = RouteRequest::corner_to_corner(grid, PolicyKind::Bounded);
        b.iter(|| black_box(plan_both(grid, &request).expect("searches run")));
    });
    group.finish();
}

criterion_group!(benches, benchmark_search);
criterion_main!(benches);
