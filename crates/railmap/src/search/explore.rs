//! Exhaustive frontier search with an incumbent cost bound.

use crate::delaunay::VertexId;
use crate::error::MapError;
use crate::graph::RouteMap;

use super::types::{Journey, SearchCfg};

/// Minimum-cost journey between `start` and `finish` over active routes.
///
/// Exhaustive over simple paths, with incumbent pruning: a forked journey
/// is admitted only while its cost is strictly below the best finished cost
/// so far, and the bound tightens the moment a journey retires. Ties go to
/// the journey that finished first in expansion order.
///
/// `start` and `finish` must index the map's vertex arena.
pub fn shortest_path(
    map: &RouteMap,
    start: VertexId,
    finish: VertexId,
    cfg: SearchCfg,
) -> Result<Journey, MapError> {
    debug_assert!(start.0 < map.vertex_count && finish.0 < map.vertex_count);
    Explorer::new(map, finish, cfg).run(start)
}

/// Convenience: the cost alone, for scoring callers.
pub fn shortest_path_cost(
    map: &RouteMap,
    start: VertexId,
    finish: VertexId,
    cfg: SearchCfg,
) -> Result<u32, MapError> {
    shortest_path(map, start, finish, cfg).map(|j| j.cost)
}

/// Frontier runner carrying shared context and accumulators.
struct Explorer<'a> {
    map: &'a RouteMap,
    /// Connection indices per vertex, active connections only.
    adj: Vec<Vec<usize>>,
    finish: VertexId,
    cfg: SearchCfg,
    best: u32,
    finished: Vec<Journey>,
    expansions: usize,
}

impl<'a> Explorer<'a> {
    fn new(map: &'a RouteMap, finish: VertexId, cfg: SearchCfg) -> Self {
        let mut adj = vec![Vec::new(); map.vertex_count];
        for (i, c) in map.connections.iter().enumerate() {
            if c.traversal_cost().is_some() {
                adj[c.a.0].push(i);
                adj[c.b.0].push(i);
            }
        }
        Self {
            map,
            adj,
            finish,
            cfg,
            best: u32::MAX,
            finished: Vec::new(),
            expansions: 0,
        }
    }

    fn run(mut self, start: VertexId) -> Result<Journey, MapError> {
        let mut frontier = vec![Journey::start_at(start)];

        while !frontier.is_empty() {
            let mut next = Vec::new();
            for journey in frontier.drain(..) {
                if journey.current == self.finish {
                    self.retire(journey);
                    continue;
                }
                if self.expansions >= self.cfg.max_expansions {
                    // Budget spent: stop forking and let the frontier drain.
                    continue;
                }
                self.expansions += 1;
                self.expand(journey, &mut next);
            }
            frontier = next;
        }

        // First finisher wins ties.
        self.finished
            .into_iter()
            .fold(None::<Journey>, |acc, j| match acc {
                Some(b) if b.cost <= j.cost => Some(b),
                _ => Some(j),
            })
            .ok_or(MapError::NoPathFound)
    }

    /// A journey standing on the target leaves the frontier and tightens
    /// the shared bound immediately, pruning the rest of this generation.
    fn retire(&mut self, journey: Journey) {
        if journey.cost < self.best {
            self.best = journey.cost;
        }
        self.finished.push(journey);
    }

    /// Fork one child per unvisited neighbor, admitting only those still
    /// strictly under the bound.
    fn expand(&mut self, journey: Journey, next: &mut Vec<Journey>) {
        for &ci in &self.adj[journey.current.0] {
            let c = &self.map.connections[ci];
            let to = c.other(journey.current);
            if journey.has_visited(to) {
                continue;
            }
            let move_cost = match c.traversal_cost() {
                Some(k) => k,
                None => continue,
            };
            let child = journey.travel(to, move_cost);
            if child.cost < self.best {
                next.push(child);
            }
        }
    }
}
