//! 2D geometry kernel for map construction.
//!
//! Purpose
//! - Keep every floating-point predicate the triangulator and mutator rely
//!   on in one place: cross/dot kernels, the circumcircle solve, and the
//!   containment tests.
//! - Stay numerically explicit (eps-aware): the circumcircle comes from the
//!   two perpendicular-bisector equations as a 2x2 linear system, which is
//!   well-posed for vertical chords where a slope-based solve divides by
//!   zero.
//!
//! Code cross-refs: `delaunay::triangulate`, `mutate::crossing_connections`.

mod circum;
mod types;

pub use circum::{circumcircle, point_in_triangle, Circumcircle};
pub use types::{cross, dot, GeomCfg, Point};
