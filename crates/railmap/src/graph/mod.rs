//! Route graph extraction from a triangulated shape.
//!
//! Purpose
//! - Turn triangle edges into a deduplicated list of playable connections,
//!   then run the two assignment passes: length bucketing (distance bins
//!   over the observed range) and palette color draws.
//! - Keep the graph purely combinatorial: a `Connection` is an unordered
//!   vertex-id pair plus two optional route slots, nothing more.
//!
//! Why slots instead of a flag
//! - The source material tracked one route plus an `active` boolean and
//!   grew a second route by duplication. Two optional slots make the same
//!   states unmistakable: `[None, None]` is a removed connection,
//!   `[Some, None]` a plain one, `[Some, Some]` a double route.
//!
//! Code cross-refs: `delaunay::Shape`, `mutate::mutate`,
//! `search::shortest_path`.

mod build;
mod types;

pub use build::{
    assign_route_colors, assign_route_lengths, build_route_map, connections_from_shape,
    dedup_connections, ROUTE_LENGTH_BUCKETS,
};
pub use types::{Connection, Route, RouteColor, RouteMap, PALETTE};

#[cfg(test)]
mod tests;
