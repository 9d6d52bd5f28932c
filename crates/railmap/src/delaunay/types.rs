//! Data types for the triangulated point set.
//!
//! Kept small and explicit to make the `build` pass and the downstream
//! graph/mutation modules easy to read.

use crate::geom::Point;

/// Index into a [`Shape`]'s vertex arena.
///
/// Vertex identity is the index, never the coordinates: two vertices at the
/// same position are still distinct vertices, and triangles touching the
/// same corner hold the same id by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

/// Unordered vertex pair, normalized smaller-index-first.
///
/// Usable as a hash key; `Edge::new(a, b) == Edge::new(b, a)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge(pub VertexId, pub VertexId);

impl Edge {
    #[inline]
    pub fn new(a: VertexId, b: VertexId) -> Self {
        if a.0 <= b.0 {
            Edge(a, b)
        } else {
            Edge(b, a)
        }
    }
}

/// Vertex-index triangle.
///
/// Roles are positional: the build pass always fans new triangles with the
/// freshly inserted point in role `a`, so derived `==` is role-sensitive on
/// purpose (it distinguishes fan provenance, not just the vertex set).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Triangle {
    pub a: VertexId,
    pub b: VertexId,
    pub c: VertexId,
}

impl Triangle {
    #[inline]
    pub fn new(a: VertexId, b: VertexId, c: VertexId) -> Self {
        Self { a, b, c }
    }

    #[inline]
    pub fn vertices(&self) -> [VertexId; 3] {
        [self.a, self.b, self.c]
    }

    /// The three edges in AB, AC, BC role order.
    ///
    /// Connection extraction walks this order; it decides which duplicate
    /// survives the first-occurrence dedup downstream.
    #[inline]
    pub fn edges(&self) -> [Edge; 3] {
        [
            Edge::new(self.a, self.b),
            Edge::new(self.a, self.c),
            Edge::new(self.b, self.c),
        ]
    }

    #[inline]
    pub fn contains_vertex(&self, v: VertexId) -> bool {
        self.a == v || self.b == v || self.c == v
    }

    /// Number of vertices shared with `other`. Adjacent triangles share
    /// exactly two.
    pub fn shared_vertex_count(&self, other: &Triangle) -> usize {
        self.vertices()
            .iter()
            .filter(|v| other.contains_vertex(**v))
            .count()
    }
}

/// Triangulated point set: the vertex arena plus surviving triangles.
///
/// The arena holds input points in their insertion order; triangle fields
/// index into it. Downstream stages may drop the triangle list, but the
/// edge-flip mutation re-reads it to find adjacent pairs.
#[derive(Clone, Debug, Default)]
pub struct Shape {
    pub vertices: Vec<Point>,
    pub triangles: Vec<Triangle>,
}

impl Shape {
    #[inline]
    pub fn point(&self, v: VertexId) -> Point {
        self.vertices[v.0]
    }

    #[inline]
    pub fn triangle_points(&self, t: &Triangle) -> [Point; 3] {
        [self.point(t.a), self.point(t.b), self.point(t.c)]
    }

    /// Unordered index pairs of triangles sharing exactly two vertices.
    ///
    /// Pairwise scan; triangle counts are small (O(n) for n input points)
    /// and the mutator calls this at most once per flip round.
    pub fn adjacent_triangle_pairs(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for i in 0..self.triangles.len() {
            for j in (i + 1)..self.triangles.len() {
                if self.triangles[i].shared_vertex_count(&self.triangles[j]) == 2 {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }
}
