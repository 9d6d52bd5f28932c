//! Circumcircle solve and containment predicates.

use crate::error::MapError;

use super::types::{cross, GeomCfg, Point};

/// Circle through the three vertices of a triangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circumcircle {
    pub center: Point,
    pub radius: f64,
}

impl Circumcircle {
    /// Inclusive containment: a point exactly on the circle counts as
    /// inside.
    ///
    /// Inclusivity decides cocircular ties. Four points on one circle (the
    /// unit square) must invalidate the first triangle when the fourth
    /// point arrives, otherwise the triangulation depends on which diagonal
    /// happened to be seeded.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        (p - self.center).norm() <= self.radius
    }
}

/// Solve for the point equidistant from `a`, `b`, and `c`.
///
/// Subtracting the squared-distance equations pairwise leaves the linear
/// system
///
/// ```text
/// 2(a - b) . p = |a|^2 - |b|^2
/// 2(a - c) . p = |a|^2 - |c|^2
/// ```
///
/// solved by Cramer's rule. Collinear inputs make the system singular and
/// return [`MapError::DegenerateGeometry`].
pub fn circumcircle(a: Point, b: Point, c: Point, cfg: GeomCfg) -> Result<Circumcircle, MapError> {
    let r1 = 2.0 * (a - b);
    let r2 = 2.0 * (a - c);
    let k1 = a.norm_squared() - b.norm_squared();
    let k2 = a.norm_squared() - c.norm_squared();

    let det = cross(r1, r2);
    if det.abs() <= cfg.eps_det {
        return Err(MapError::DegenerateGeometry);
    }

    let center = Point::new((k1 * r2.y - k2 * r1.y) / det, (r1.x * k2 - r2.x * k1) / det);
    Ok(Circumcircle {
        center,
        radius: (a - center).norm(),
    })
}

/// Point-in-triangle test via the three edge cross products.
///
/// Accepts either winding; a point on an edge counts as inside.
pub fn point_in_triangle(p: Point, a: Point, b: Point, c: Point) -> bool {
    let d1 = cross(b - a, p - a);
    let d2 = cross(c - b, p - b);
    let d3 = cross(a - c, p - c);
    let any_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let any_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(any_neg && any_pos)
}
