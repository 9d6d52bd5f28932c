//! Data types for the route graph.
//!
//! Kept small and explicit: connections are plain value types indexed by
//! the same vertex arena the triangulation produced.

use crate::delaunay::VertexId;

/// Color of a route slot: the eight claimable colors plus neutral grey.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteColor {
    Red,
    Green,
    Blue,
    Magenta,
    Black,
    White,
    Yellow,
    Orange,
    Grey,
}

impl RouteColor {
    /// Stable lowercase name, used by writers and reports.
    pub fn name(self) -> &'static str {
        match self {
            RouteColor::Red => "red",
            RouteColor::Green => "green",
            RouteColor::Blue => "blue",
            RouteColor::Magenta => "magenta",
            RouteColor::Black => "black",
            RouteColor::White => "white",
            RouteColor::Yellow => "yellow",
            RouteColor::Orange => "orange",
            RouteColor::Grey => "grey",
        }
    }
}

/// Draw palette the color pass cycles through: each claimable color once,
/// grey twice, giving grey double weight per ten routes.
pub const PALETTE: [RouteColor; 10] = [
    RouteColor::Red,
    RouteColor::Green,
    RouteColor::Blue,
    RouteColor::Magenta,
    RouteColor::Black,
    RouteColor::White,
    RouteColor::Yellow,
    RouteColor::Orange,
    RouteColor::Grey,
    RouteColor::Grey,
];

/// One traversable route on a connection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    /// Bucketed length in `1..=6`; doubles as the traversal cost.
    pub length: u32,
    pub color: RouteColor,
    /// Claimed by a player. Construction always starts `false`.
    pub taken: bool,
}

/// Two-way link between two distinct vertices carrying up to two parallel
/// routes.
///
/// A `None` slot is an inactive route. Slot 0 fills first; a connection
/// with both slots empty is invisible to path search but keeps its place in
/// the list (a later duplicate mutation cannot resurrect it, only
/// single-route connections are eligible).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Connection {
    pub a: VertexId,
    pub b: VertexId,
    pub routes: [Option<Route>; 2],
}

impl Connection {
    /// New inactive connection; endpoint order is normalized so unordered
    /// equality is plain `==`.
    pub fn new(a: VertexId, b: VertexId) -> Self {
        debug_assert_ne!(a, b, "connection endpoints must be distinct");
        let (a, b) = if a.0 <= b.0 { (a, b) } else { (b, a) };
        Self {
            a,
            b,
            routes: [None, None],
        }
    }

    /// True when this connection links exactly the unordered pair `{x, y}`.
    #[inline]
    pub fn joins(&self, x: VertexId, y: VertexId) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }

    #[inline]
    pub fn touches(&self, v: VertexId) -> bool {
        self.a == v || self.b == v
    }

    /// Far endpoint when standing at `v` (callers ensure `touches(v)`).
    #[inline]
    pub fn other(&self, v: VertexId) -> VertexId {
        if self.a == v {
            self.b
        } else {
            self.a
        }
    }

    /// Number of occupied route slots (0, 1 or 2).
    #[inline]
    pub fn active_routes(&self) -> usize {
        self.routes.iter().flatten().count()
    }

    /// Traversal cost: the first occupied slot's length, `None` when the
    /// connection is fully inactive.
    #[inline]
    pub fn traversal_cost(&self) -> Option<u32> {
        self.routes.iter().flatten().next().map(|r| r.length)
    }
}

/// The playable route graph extracted from a triangulated shape.
///
/// Holds no coordinates; vertex positions stay in the `Shape` arena (or any
/// slice parallel to it) and are only consulted by length bucketing, the
/// crossing check, and destination sampling.
#[derive(Clone, Debug)]
pub struct RouteMap {
    pub vertex_count: usize,
    pub connections: Vec<Connection>,
}

impl RouteMap {
    /// Index of the connection joining `{x, y}`, if present.
    pub fn position_of(&self, x: VertexId, y: VertexId) -> Option<usize> {
        self.connections.iter().position(|c| c.joins(x, y))
    }

    /// Total occupied route slots across all connections.
    pub fn total_active_routes(&self) -> usize {
        self.connections.iter().map(|c| c.active_routes()).sum()
    }
}
