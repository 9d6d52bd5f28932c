//! Random structural edits over a built route map.
//!
//! Purpose
//! - Break the visual regularity of a pure Delaunay graph with three edit
//!   kinds: duplicate a route onto a connection's second slot, retire a
//!   route, or flip a shared triangle edge onto the opposite diagonal.
//! - Keep bad states unrepresentable: slot occupancy is the only activity
//!   flag, and every round backs off to a no-op when its candidate pool is
//!   empty.
//!
//! Why the flip skips planarity
//! - The flip swaps diagonal {a, c} for {b, d} sight unseen. On a convex
//!   quad that is harmless; on a reflex quad the new diagonal can cross
//!   other connections, which reads as intentional map flavor rather than
//!   a defect. [`crossing_connections`] exists so tests and callers can
//!   observe exactly when that happened; nothing here calls it.
//!
//! Code cross-refs: `graph::RouteMap`, `delaunay::Shape` (flip re-reads the
//! triangle list), `sample::ReplayToken`.

use rand::rngs::StdRng;
use rand::Rng;

use crate::delaunay::{Edge, Shape, Triangle, VertexId};
use crate::error::MapError;
use crate::geom::{cross, Point};
use crate::graph::{Connection, RouteMap};
use crate::sample::ReplayToken;


/// Mutation feature toggles and round count.
#[derive(Clone, Copy, Debug)]
pub struct MutateCfg {
    /// Independent mutation rounds to run.
    pub steps: usize,
    pub enable_duplicate: bool,
    pub enable_remove: bool,
    pub enable_flip: bool,
}

impl Default for MutateCfg {
    fn default() -> Self {
        Self {
            steps: 10,
            enable_duplicate: true,
            enable_remove: true,
            enable_flip: true,
        }
    }
}

/// The three edit kinds, in draw order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MutationKind {
    Duplicate,
    Remove,
    Flip,
}

/// Outcome tally of one [`mutate`] call, indexed by [`MutationKind`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MutationReport {
    pub applied: [usize; 3],
    pub skipped: [usize; 3],
}

impl MutationReport {
    #[inline]
    pub fn total_applied(&self) -> usize {
        self.applied.iter().sum()
    }

    #[inline]
    pub fn total_skipped(&self) -> usize {
        self.skipped.iter().sum()
    }
}

/// Run `cfg.steps` mutation rounds over `map`.
///
/// Every round draws a kind uniformly from all three, disabled or not, so
/// toggling one kind off never shifts the draws the other kinds see. A
/// disabled kind or an empty candidate pool makes the round a recorded
/// no-op.
pub fn mutate(map: &mut RouteMap, shape: &Shape, cfg: MutateCfg, token: ReplayToken) -> MutationReport {
    let mut rng = token.to_std_rng();
    let mut report = MutationReport::default();

    for _ in 0..cfg.steps {
        let kind = match rng.gen_range(0..3) {
            0 => MutationKind::Duplicate,
            1 => MutationKind::Remove,
            _ => MutationKind::Flip,
        };
        let enabled = match kind {
            MutationKind::Duplicate => cfg.enable_duplicate,
            MutationKind::Remove => cfg.enable_remove,
            MutationKind::Flip => cfg.enable_flip,
        };
        if !enabled {
            report.skipped[kind as usize] += 1;
            continue;
        }
        let outcome = match kind {
            MutationKind::Duplicate => duplicate_route(map, &mut rng),
            MutationKind::Remove => remove_route(map, &mut rng),
            MutationKind::Flip => flip_edge(map, shape, &mut rng),
        };
        match outcome {
            Ok(()) => report.applied[kind as usize] += 1,
            Err(_) => report.skipped[kind as usize] += 1,
        }
    }
    report
}

/// Copy the route of a random single-route connection into its second
/// slot, with `taken` reset.
fn duplicate_route(map: &mut RouteMap, rng: &mut StdRng) -> Result<(), MapError> {
    let pool: Vec<usize> = (0..map.connections.len())
        .filter(|&i| map.connections[i].active_routes() == 1)
        .collect();
    if pool.is_empty() {
        return Err(MapError::EmptyMutationPool);
    }
    let i = pool[rng.gen_range(0..pool.len())];
    let c = &mut map.connections[i];
    let source = match c.routes.iter().flatten().next().copied() {
        Some(r) => r,
        None => return Err(MapError::EmptyMutationPool),
    };
    c.routes[1] = Some(crate::graph::Route {
        taken: false,
        ..source
    });
    Ok(())
}

/// Clear one route slot of a random active connection: the second slot if
/// occupied, else the first. A fully cleared connection keeps its list
/// position but disappears from path search.
fn remove_route(map: &mut RouteMap, rng: &mut StdRng) -> Result<(), MapError> {
    let pool: Vec<usize> = (0..map.connections.len())
        .filter(|&i| map.connections[i].active_routes() > 0)
        .collect();
    if pool.is_empty() {
        return Err(MapError::EmptyMutationPool);
    }
    let i = pool[rng.gen_range(0..pool.len())];
    let c = &mut map.connections[i];
    if c.routes[1].is_some() {
        c.routes[1] = None;
    } else {
        c.routes[0] = None;
    }
    Ok(())
}

/// Re-aim the connection on a shared triangle edge at the opposite
/// diagonal, carrying its route slots verbatim.
///
/// Backs off when the diagonal's connection was already flipped away or
/// the opposite diagonal already has a connection (a second one would
/// break the one-connection-per-pair invariant).
fn flip_edge(map: &mut RouteMap, shape: &Shape, rng: &mut StdRng) -> Result<(), MapError> {
    let pairs = shape.adjacent_triangle_pairs();
    if pairs.is_empty() {
        return Err(MapError::EmptyMutationPool);
    }
    let (ti, tj) = pairs[rng.gen_range(0..pairs.len())];
    let (shared, b, d) = match shared_edge_and_opposites(&shape.triangles[ti], &shape.triangles[tj])
    {
        Some(v) => v,
        None => return Err(MapError::EmptyMutationPool),
    };

    let pos = match map.position_of(shared.0, shared.1) {
        Some(p) => p,
        None => return Err(MapError::EmptyMutationPool),
    };
    if map.position_of(b, d).is_some() {
        return Err(MapError::EmptyMutationPool);
    }

    let mut flipped = Connection::new(b, d);
    flipped.routes = map.connections[pos].routes;
    map.connections[pos] = flipped;
    Ok(())
}

/// Shared edge of two adjacent triangles plus each one's off-edge vertex.
/// `None` unless the triangles share exactly two vertices.
fn shared_edge_and_opposites(t1: &Triangle, t2: &Triangle) -> Option<(Edge, VertexId, VertexId)> {
    if t1.shared_vertex_count(t2) != 2 {
        return None;
    }
    let shared: Vec<VertexId> = t1
        .vertices()
        .into_iter()
        .filter(|v| t2.contains_vertex(*v))
        .collect();
    let b = t1.vertices().into_iter().find(|v| !t2.contains_vertex(*v))?;
    let d = t2.vertices().into_iter().find(|v| !t1.contains_vertex(*v))?;
    Some((Edge::new(shared[0], shared[1]), b, d))
}

/// Index pairs of active connections whose segments properly cross
/// (interior point in common, shared endpoints excluded).
///
/// Purely observational; flips that produced crossings stay in the map.
pub fn crossing_connections(map: &RouteMap, positions: &[Point]) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for i in 0..map.connections.len() {
        let ci = &map.connections[i];
        if ci.active_routes() == 0 {
            continue;
        }
        for j in (i + 1)..map.connections.len() {
            let cj = &map.connections[j];
            if cj.active_routes() == 0 {
                continue;
            }
            if ci.touches(cj.a) || ci.touches(cj.b) {
                continue;
            }
            let p1 = positions[ci.a.0];
            let p2 = positions[ci.b.0];
            let q1 = positions[cj.a.0];
            let q2 = positions[cj.b.0];
            if segments_cross(p1, p2, q1, q2) {
                out.push((i, j));
            }
        }
    }
    out
}

/// Strict straddle test: each segment separates the other's endpoints.
/// Touching at an endpoint or running collinear does not count.
fn segments_cross(p1: Point, p2: Point, q1: Point, q2: Point) -> bool {
    let d1 = cross(p2 - p1, q1 - p1);
    let d2 = cross(p2 - p1, q2 - p1);
    let d3 = cross(q2 - q1, p1 - q1);
    let d4 = cross(q2 - q1, p2 - q1);
    d1 * d2 < 0.0 && d3 * d4 < 0.0
}
