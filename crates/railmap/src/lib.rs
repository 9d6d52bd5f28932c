//! Route-map generation core: triangulate, extract, mutate, search.
//!
//! Pipeline
//! - `delaunay::triangulate` turns location points into a planar triangle
//!   mesh.
//! - `graph::build_route_map` extracts deduplicated connections and runs
//!   the length and color passes.
//! - `mutate::mutate` roughens the regular mesh with seeded edits.
//! - `search::shortest_path` scores vertex pairs; `destinations::generate`
//!   deals scored ticket pairs from a route-weighted pool.
//!
//! Every randomized stage takes a `sample::ReplayToken`, so one `(seed,
//! index)` pair replays a whole map bit for bit.

pub mod api;
pub mod delaunay;
pub mod destinations;
pub mod error;
pub mod geom;
pub mod graph;
pub mod mutate;
pub mod sample;
pub mod search;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::MapError;
pub use geom::Point;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::delaunay::{triangulate, Shape, Triangle, TriangulateCfg, VertexId};
    pub use crate::destinations::{
        generate as generate_destinations, Destination, DestinationCfg,
    };
    pub use crate::error::MapError;
    pub use crate::geom::{GeomCfg, Point};
    pub use crate::graph::{build_route_map, Connection, Route, RouteColor, RouteMap};
    pub use crate::mutate::{crossing_connections, mutate, MutateCfg, MutationReport};
    pub use crate::sample::ReplayToken;
    pub use crate::search::{shortest_path, shortest_path_cost, Journey, SearchCfg};
}
