//! Search state and configuration.
//!
//! Kept small and explicit to make the `explore` loop easy to read.

use crate::delaunay::VertexId;

/// One in-progress walk over the route graph: where it stands, what it has
/// paid, and every vertex it stood on before.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Journey {
    pub current: VertexId,
    pub cost: u32,
    pub visited: Vec<VertexId>,
}

impl Journey {
    pub fn start_at(v: VertexId) -> Self {
        Self {
            current: v,
            cost: 0,
            visited: Vec::new(),
        }
    }

    /// Fork this journey onto an adjacent vertex.
    ///
    /// The visited list is cloned, never shared: sibling branches must not
    /// see each other's history.
    pub fn travel(&self, to: VertexId, move_cost: u32) -> Journey {
        let mut visited = self.visited.clone();
        visited.push(self.current);
        Journey {
            current: to,
            cost: self.cost + move_cost,
            visited,
        }
    }

    #[inline]
    pub fn has_visited(&self, v: VertexId) -> bool {
        self.visited.contains(&v)
    }

    /// Full walk including the current vertex.
    pub fn trail(&self) -> Vec<VertexId> {
        let mut t = self.visited.clone();
        t.push(self.current);
        t
    }
}

/// Search limits.
#[derive(Clone, Copy, Debug)]
pub struct SearchCfg {
    /// Journeys expanded before the search stops forking and settles for
    /// the best finished journey so far. Incumbent pruning alone does not
    /// bound dense graphs, so the budget caps worst-case work.
    pub max_expansions: usize,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            max_expansions: 1_000_000,
        }
    }
}
