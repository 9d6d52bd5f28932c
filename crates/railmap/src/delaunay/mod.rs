//! Delaunay triangulation of the map's location points.
//!
//! Purpose
//! - Turn a flat point list into the planar triangle mesh the route graph
//!   is extracted from, via incremental Bowyer-Watson insertion inside an
//!   enclosing super-triangle.
//! - Stay deterministic: same points in the same order give the same
//!   triangles in the same order, including cocircular ties (the inclusive
//!   circumcircle test resolves those in favor of re-triangulating).
//!
//! Why index arenas
//! - Triangles and connections refer to vertices by arena index, so vertex
//!   identity survives any amount of floating-point noise and the graph
//!   stage never compares coordinates.
//!
//! Code cross-refs: `geom::circumcircle`, `graph::connections_from_shape`,
//! `mutate::mutate` (edge flips re-read `Shape::triangles`).

mod build;
mod types;

pub use build::{super_triangle, triangulate, TriangulateCfg};
pub use types::{Edge, Shape, Triangle, VertexId};
