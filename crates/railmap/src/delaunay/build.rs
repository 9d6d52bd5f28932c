//! Incremental Bowyer-Watson triangulation.

use std::collections::HashMap;

use crate::error::MapError;
use crate::geom::{circumcircle, GeomCfg, Point};

use super::types::{Edge, Shape, Triangle, VertexId};

/// Triangulation options.
#[derive(Clone, Copy, Debug)]
pub struct TriangulateCfg {
    /// Scales the fixed 4-unit margin of the enclosing super-triangle.
    /// Raise it for point clouds much wider than a unit box.
    pub scale_modifier: f64,
    pub geom: GeomCfg,
}

impl Default for TriangulateCfg {
    fn default() -> Self {
        Self {
            scale_modifier: 1.0,
            geom: GeomCfg::default(),
        }
    }
}

/// Enclosing super-triangle for a non-empty point cloud.
///
/// Apex centered above the bounding box, base corners below and beside it,
/// all pushed out by a 4-unit margin times `scale_modifier`. Every input
/// point lands strictly inside for reasonably scaled clouds.
pub fn super_triangle(points: &[Point], scale_modifier: f64) -> [Point; 3] {
    let mut x_min = f64::MAX;
    let mut x_max = f64::MIN;
    let mut y_min = f64::MAX;
    let mut y_max = f64::MIN;
    for p in points {
        x_min = x_min.min(p.x);
        x_max = x_max.max(p.x);
        y_min = y_min.min(p.y);
        y_max = y_max.max(p.y);
    }
    let margin = 4.0 * scale_modifier;
    [
        Point::new((x_min + x_max) / 2.0, y_max + margin),
        Point::new(x_min - margin, y_min),
        Point::new(x_max + margin, y_min),
    ]
}

/// Bowyer-Watson over `points`, inserted in slice order.
///
/// The vertex arena keeps input points at indices `0..n` and appends the
/// three super-triangle vertices at `n..n+3`, so the final cleanup is an
/// index comparison. Output triangle order is deterministic for a given
/// input order.
pub fn triangulate(points: &[Point], cfg: TriangulateCfg) -> Result<Shape, MapError> {
    if points.len() < 3 {
        return Err(MapError::InsufficientPoints {
            found: points.len(),
        });
    }

    let n = points.len();
    let [sa, sb, sc] = super_triangle(points, cfg.scale_modifier);
    let mut vertices = points.to_vec();
    vertices.push(sa);
    vertices.push(sb);
    vertices.push(sc);

    let mut triangles = vec![Triangle::new(VertexId(n), VertexId(n + 1), VertexId(n + 2))];

    for i in 0..n {
        let p = vertices[i];

        // Triangles whose circumcircle holds the new point, inclusively.
        let bad = bad_triangles(&triangles, &vertices, p, cfg.geom);

        // Edges shared by two bad triangles cancel; edges seen once form
        // the cavity boundary. Collect counts in a map but order from a
        // rescan, so the result never depends on hash iteration order.
        let mut edge_count: HashMap<Edge, usize> = HashMap::new();
        for &ti in &bad {
            for e in triangles[ti].edges() {
                *edge_count.entry(e).or_insert(0) += 1;
            }
        }
        let mut boundary = Vec::new();
        for &ti in &bad {
            for e in triangles[ti].edges() {
                if edge_count[&e] == 1 {
                    boundary.push(e);
                }
            }
        }

        // Drop the cavity back-to-front so earlier indices stay valid, then
        // fan it: the new point takes role `a` of every new triangle.
        for &ti in bad.iter().rev() {
            triangles.remove(ti);
        }
        for e in boundary {
            triangles.push(Triangle::new(VertexId(i), e.0, e.1));
        }
    }

    // Anything still touching a super vertex goes, as does any collinear
    // sliver that drifted through (possible when inputs themselves are
    // collinear). Survivors index only the real inputs and always have a
    // circumcircle.
    triangles.retain(|t| {
        t.vertices().iter().all(|v| v.0 < n)
            && circumcircle(vertices[t.a.0], vertices[t.b.0], vertices[t.c.0], cfg.geom).is_ok()
    });
    vertices.truncate(n);

    Ok(Shape {
        vertices,
        triangles,
    })
}

/// Indices (ascending) of triangles whose circumcircle contains `p`.
fn bad_triangles(
    triangles: &[Triangle],
    vertices: &[Point],
    p: Point,
    geom: GeomCfg,
) -> Vec<usize> {
    let mut bad = Vec::new();
    for (ti, tri) in triangles.iter().enumerate() {
        let a = vertices[tri.a.0];
        let b = vertices[tri.b.0];
        let c = vertices[tri.c.0];
        match circumcircle(a, b, c, geom) {
            Ok(circle) => {
                if circle.contains(p) {
                    bad.push(ti);
                }
            }
            // Collinear sliver: no circumcircle, never bad. The super
            // vertex filter sweeps these out at the end.
            Err(_) => {}
        }
    }
    bad
}
