//! Connection extraction and the route assignment passes.

use std::collections::HashSet;

use crate::delaunay::{Shape, VertexId};
use crate::geom::Point;
use crate::sample::{DrawPool, ReplayToken};

use super::types::{Connection, Route, RouteColor, RouteMap, PALETTE};

/// Route lengths bucket into this many equal-width bins over the observed
/// distance range; bucket index + 1 is the length (and traversal cost).
pub const ROUTE_LENGTH_BUCKETS: u32 = 6;

/// One inactive connection per triangle edge, AB/AC/BC per triangle, in
/// triangle order. Shared edges appear once per owning triangle; see
/// [`dedup_connections`].
pub fn connections_from_shape(shape: &Shape) -> Vec<Connection> {
    let mut connections = Vec::with_capacity(shape.triangles.len() * 3);
    for t in &shape.triangles {
        for e in t.edges() {
            connections.push(Connection::new(e.0, e.1));
        }
    }
    connections
}

/// Keep the first occurrence of every unordered endpoint pair.
///
/// Idempotent; relative order of survivors is the input order, which later
/// seeded passes (color draws) depend on.
pub fn dedup_connections(connections: Vec<Connection>) -> Vec<Connection> {
    let mut seen: HashSet<(VertexId, VertexId)> = HashSet::with_capacity(connections.len());
    let mut out = Vec::with_capacity(connections.len());
    for c in connections {
        if seen.insert((c.a, c.b)) {
            out.push(c);
        }
    }
    out
}

/// Bucket each connection's Euclidean length into `ROUTE_LENGTH_BUCKETS`
/// equal bins over the observed `[min, max]` range, and activate the
/// primary slot with that length.
///
/// All-equal distances make every bin boundary collapse onto `min`, so
/// everything lands in bucket 1. Rounding that pushes the longest distance
/// past the last boundary falls back to the top bucket.
pub fn assign_route_lengths(map: &mut RouteMap, positions: &[Point]) {
    if map.connections.is_empty() {
        return;
    }
    let dists: Vec<f64> = map
        .connections
        .iter()
        .map(|c| (positions[c.a.0] - positions[c.b.0]).norm())
        .collect();
    let mut min = f64::MAX;
    let mut max = f64::MIN;
    for &d in &dists {
        min = min.min(d);
        max = max.max(d);
    }
    let bracket = (max - min) / f64::from(ROUTE_LENGTH_BUCKETS);

    for (c, &d) in map.connections.iter_mut().zip(&dists) {
        let mut length = ROUTE_LENGTH_BUCKETS;
        for j in 0..ROUTE_LENGTH_BUCKETS {
            if d <= min + bracket * f64::from(j + 1) {
                length = j + 1;
                break;
            }
        }
        c.routes[0] = Some(Route {
            length,
            color: RouteColor::Grey,
            taken: false,
        });
    }
}

/// Draw a color for every active route slot, without replacement, from a
/// pool built by cycling [`PALETTE`] up to the active-slot count.
///
/// Pool size equals demand by construction, so every slot gets a draw and
/// the overall color multiset is exactly the cycled palette prefix.
pub fn assign_route_colors(map: &mut RouteMap, token: ReplayToken) {
    let total = map.total_active_routes();
    let colors: Vec<RouteColor> = (0..total).map(|i| PALETTE[i % PALETTE.len()]).collect();
    let mut pool = DrawPool::new(colors);
    let mut rng = token.to_std_rng();

    for c in &mut map.connections {
        for slot in &mut c.routes {
            if let Some(route) = slot {
                if let Some(color) = pool.draw(&mut rng) {
                    route.color = color;
                }
            }
        }
    }
}

/// Full graph construction: extract, dedup, bucket lengths, draw colors.
pub fn build_route_map(shape: &Shape, token: ReplayToken) -> RouteMap {
    let connections = dedup_connections(connections_from_shape(shape));
    let mut map = RouteMap {
        vertex_count: shape.vertices.len(),
        connections,
    };
    assign_route_lengths(&mut map, &shape.vertices);
    assign_route_colors(&mut map, token);
    map
}
