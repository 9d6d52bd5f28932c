//! Curated API surface for the map pipeline (UNSTABLE).
//!
//! Important
//! - This is a convenience surface for project-internal callers (the CLI,
//!   benches, experiments). Breaking changes are allowed and expected.
//! - Prefer these re-exports over module paths for clarity; the module
//!   layout is free to shift underneath them.

// Geometry kernel
pub use crate::geom::{
    circumcircle, cross, dot, point_in_triangle, Circumcircle, GeomCfg, Point,
};
// Triangulation
pub use crate::delaunay::{
    super_triangle, triangulate, Edge, Shape, Triangle, TriangulateCfg, VertexId,
};
// Route graph construction
pub use crate::graph::{
    assign_route_colors, assign_route_lengths, build_route_map, connections_from_shape,
    dedup_connections, Connection, Route, RouteColor, RouteMap, PALETTE, ROUTE_LENGTH_BUCKETS,
};
// Structural mutation
pub use crate::mutate::{crossing_connections, mutate, MutateCfg, MutationKind, MutationReport};
// Path search and destination sampling
pub use crate::destinations::{generate as generate_destinations, Destination, DestinationCfg};
pub use crate::search::{shortest_path, shortest_path_cost, Journey, SearchCfg};
// Seeded sampling
pub use crate::sample::{random_unit_points, shuffled, DrawPool, ReplayToken};
// Errors
pub use crate::error::MapError;
