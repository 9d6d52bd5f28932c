//! Scalar kernels and tolerances.
//!
//! - `GeomCfg`: centralizes the determinant epsilon for the 2x2 solves.
//! - `cross`/`dot`: the only scalar kernels the predicates are built from.

use nalgebra::Vector2;

/// 2D point (and displacement) used across the crate.
pub type Point = Vector2<f64>;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Determinant magnitude below which a 2x2 solve counts as singular.
    pub eps_det: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps_det: 1e-12 }
    }
}

/// 2D pseudo-cross `u.x * v.y - u.y * v.x`; the sign is the turn direction.
#[inline]
pub fn cross(u: Point, v: Point) -> f64 {
    u.x * v.y - u.y * v.x
}

/// Plain dot product.
#[inline]
pub fn dot(u: Point, v: Point) -> f64 {
    u.x * v.x + u.y * v.y
}
