//! Criterion benchmarks for path search and destination sampling over
//! generated maps.
//! Focus sizes: n in {10, 25, 50} map vertices (search cost grows with
//! graph density, not vertex count alone).

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use railmap::api::{
    build_route_map, generate_destinations, random_unit_points, shortest_path_cost, triangulate,
    DestinationCfg, ReplayToken, RouteMap, SearchCfg, Shape, TriangulateCfg,
};

fn seeded_map(n: usize, seed: u64) -> (Shape, RouteMap) {
    let pts = random_unit_points(n, ReplayToken::new(seed, 0));
    let shape = triangulate(&pts, TriangulateCfg::default()).unwrap();
    let map = build_route_map(&shape, ReplayToken::new(seed, 1));
    (shape, map)
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    for &n in &[10usize, 25, 50] {
        let (_, map) = seeded_map(n, 46);
        // Corner-to-corner in arena order: vertex 0 against the last one.
        let start = railmap::api::VertexId(0);
        let finish = railmap::api::VertexId(n - 1);
        group.bench_with_input(BenchmarkId::new("shortest_path", n), &n, |b, _| {
            b.iter(|| {
                let _cost = shortest_path_cost(&map, start, finish, SearchCfg::default()).unwrap();
            })
        });
    }
    group.finish();
}

fn bench_destinations(c: &mut Criterion) {
    let mut group = c.benchmark_group("destinations");
    for &n in &[10usize, 25] {
        let (shape, map) = seeded_map(n, 47);
        group.bench_with_input(BenchmarkId::new("generate_10", n), &n, |b, _| {
            b.iter_batched(
                || ReplayToken::new(48, 0),
                |tok| {
                    let _dests =
                        generate_destinations(&map, &shape.vertices, DestinationCfg::default(), tok)
                            .unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_search, bench_destinations);
criterion_main!(benches);
