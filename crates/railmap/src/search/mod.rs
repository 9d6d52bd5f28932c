//! Shortest-path search over active routes.
//!
//! Purpose
//! - Score vertex pairs by the cheapest simple path whose every hop is an
//!   active route; route length is the hop cost.
//! - Exhaustive by intent: journeys fan out generation by generation and
//!   only an incumbent bound prunes them, so the result is exact on the
//!   graph sizes maps actually have (tens of vertices).
//!
//! Why generations instead of a priority queue
//! - Retiring whole generations keeps the tie-break observable (first
//!   finisher in expansion order wins) and makes the expansion budget a
//!   plain counter. A heap would find the same costs but order ties by
//!   heap internals.
//!
//! Code cross-refs: `graph::RouteMap`, `destinations::generate`.

mod explore;
mod types;

pub use explore::{shortest_path, shortest_path_cost};
pub use types::{Journey, SearchCfg};
