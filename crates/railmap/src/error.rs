//! Error taxonomy for map construction and search.

use thiserror::Error;

/// Errors surfaced while building or querying a route map.
///
/// Every variant names the stage that failed; none carry backtraces or
/// source chains because all failures here are terminal verdicts about the
/// input, not wrapped I/O.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MapError {
    /// Triangulation requires at least three input points.
    #[error("triangulation needs at least 3 points, got {found}")]
    InsufficientPoints { found: usize },

    /// A circumcircle solve received (near-)collinear vertices.
    #[error("degenerate geometry: circumcircle of collinear points")]
    DegenerateGeometry,

    /// The search frontier drained without any journey reaching the target.
    #[error("no route path between the requested vertices")]
    NoPathFound,

    /// The destination pool could not supply a single valid pair.
    #[error("not enough location slots for a destination pair")]
    InsufficientSlots,

    /// A mutation round found nothing eligible to edit.
    #[error("mutation pool is empty")]
    EmptyMutationPool,
}
