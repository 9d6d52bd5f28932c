//! Destination sampling: route-weighted location pairs scored by shortest
//! path.
//!
//! Purpose
//! - Deal destination tickets the way the board game does: every vertex
//!   enters the draw pool once per active route ending at it, so hubs with
//!   many routes come up proportionally more often.
//! - Score each drawn pair with the exhaustive search; the score is the
//!   cheapest active-route cost at generation time.
//!
//! Model
//! - Draws come from one shrinking pool per call. Pairs whose endpoints sit
//!   on the exact same position are never formed, and pairs with no
//!   connecting path are skipped outright; both leave their slots consumed,
//!   so a pathological map yields a short list rather than a livelock.
//!
//! Code cross-refs: `search::shortest_path_cost`, `sample::DrawPool`.

use crate::delaunay::VertexId;
use crate::error::MapError;
use crate::geom::Point;
use crate::graph::RouteMap;
use crate::sample::{DrawPool, ReplayToken};
use crate::search::{shortest_path_cost, SearchCfg};

/// A scored pair of locations. Endpoints are unordered; `value` is the
/// shortest active-route cost between them when the pair was drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Destination {
    pub start: VertexId,
    pub finish: VertexId,
    pub value: u32,
}

/// Generator quota and search limits.
#[derive(Clone, Copy, Debug)]
pub struct DestinationCfg {
    /// Destinations to draw; the list is shorter when the pool runs dry.
    pub count: usize,
    pub search: SearchCfg,
}

impl Default for DestinationCfg {
    fn default() -> Self {
        Self {
            count: 10,
            search: SearchCfg::default(),
        }
    }
}

/// One pool entry: a vertex occurrence with its position, kept so the
/// coincidence filter can compare exact coordinates.
#[derive(Clone, Copy, Debug)]
struct Slot {
    vertex: VertexId,
    position: Point,
}

/// The draw pool multiset: one slot per active route endpoint occurrence.
fn location_slots(map: &RouteMap, positions: &[Point]) -> Vec<Slot> {
    let mut slots = Vec::new();
    for (i, &position) in positions.iter().enumerate() {
        let vertex = VertexId(i);
        for c in &map.connections {
            if !c.touches(vertex) {
                continue;
            }
            for _ in 0..c.active_routes() {
                slots.push(Slot { vertex, position });
            }
        }
    }
    slots
}

/// Draw up to `cfg.count` scored destination pairs.
///
/// Returns a partial list when the pool cannot supply another
/// position-distinct pair, and `InsufficientSlots` only when not a single
/// destination could be formed (with `cfg.count > 0`).
pub fn generate(
    map: &RouteMap,
    positions: &[Point],
    cfg: DestinationCfg,
    token: ReplayToken,
) -> Result<Vec<Destination>, MapError> {
    let mut rng = token.to_std_rng();
    let mut pool = DrawPool::new(location_slots(map, positions));
    let mut out = Vec::with_capacity(cfg.count);

    while out.len() < cfg.count {
        let start = match pool.draw(&mut rng) {
            Some(s) => s,
            None => break,
        };
        let finish = match pool.draw_where(&mut rng, |s| s.position != start.position) {
            Some(s) => s,
            None => break,
        };
        match shortest_path_cost(map, start.vertex, finish.vertex, cfg.search) {
            Ok(value) => out.push(Destination {
                start: start.vertex,
                finish: finish.vertex,
                value,
            }),
            // Unreachable pair: both slots stay consumed, the quota does
            // not advance.
            Err(MapError::NoPathFound) => {}
            Err(e) => return Err(e),
        }
    }

    if out.is_empty() && cfg.count > 0 {
        return Err(MapError::InsufficientSlots);
    }
    Ok(out)
}
