//! Map-generation timing probe for a single seeded point cloud.
//!
//! Purpose
//! - Provide a reproducible, code-backed data point for "how long does each
//!   pipeline stage take on a ~50-node map?"
//! - Print stage timings and map shape as key=value lines for quick
//!   comparison across changes.
//!
//! Why this shape
//! - 50 unit-box points match the node counts real maps use, and the fixed
//!   replay token makes every run identical, so timing noise is the only
//!   variable.

use std::time::Instant;

use railmap::api::{
    build_route_map, crossing_connections, generate_destinations, mutate, random_unit_points,
    triangulate, DestinationCfg, MutateCfg, ReplayToken, TriangulateCfg,
};

fn main() {
    let seed = 42;
    let points = random_unit_points(50, ReplayToken::new(seed, 0));

    let tri_start = Instant::now();
    let shape = triangulate(&points, TriangulateCfg::default()).expect("triangulation succeeds");
    let tri_elapsed = tri_start.elapsed().as_secs_f64() * 1e3;

    let graph_start = Instant::now();
    let mut map = build_route_map(&shape, ReplayToken::new(seed, 1));
    let graph_elapsed = graph_start.elapsed().as_secs_f64() * 1e3;
    let connections_before = map.connections.len();

    let mutate_start = Instant::now();
    let report = mutate(&mut map, &shape, MutateCfg::default(), ReplayToken::new(seed, 2));
    let mutate_elapsed = mutate_start.elapsed().as_secs_f64() * 1e3;

    let dest_start = Instant::now();
    let dests = generate_destinations(
        &map,
        &shape.vertices,
        DestinationCfg::default(),
        ReplayToken::new(seed, 3),
    )
    .expect("destination pool suffices on a 50-node map");
    let dest_elapsed = dest_start.elapsed().as_secs_f64() * 1e3;

    let crossings = crossing_connections(&map, &shape.vertices);

    println!(
        "vertices={} triangles={} connections={} active_routes={}",
        shape.vertices.len(),
        shape.triangles.len(),
        map.connections.len(),
        map.total_active_routes()
    );
    assert_eq!(connections_before, map.connections.len());
    println!(
        "mutations_applied={} mutations_skipped={} flip_crossings={}",
        report.total_applied(),
        report.total_skipped(),
        crossings.len()
    );
    println!(
        "destinations={} value_min={} value_max={}",
        dests.len(),
        dests.iter().map(|d| d.value).min().unwrap_or(0),
        dests.iter().map(|d| d.value).max().unwrap_or(0)
    );
    println!("triangulate_time_ms={tri_elapsed:.3}");
    println!("graph_time_ms={graph_elapsed:.3}");
    println!("mutate_time_ms={mutate_elapsed:.3}");
    println!("destinations_time_ms={dest_elapsed:.3}");
}
