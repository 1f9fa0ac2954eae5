//! 2D point-in-triangle tests for face hit-testing in canvas space.

use glam::DVec2;

/// Signed area of the parallelogram spanned by `a->b` and `a->p`.
fn edge_sign(a: DVec2, b: DVec2, p: DVec2) -> f64 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

/// Inclusive point-in-triangle test.
///
/// A point exactly on an edge or vertex counts as inside, so a quad split
/// into two triangles cannot drop a hit on the shared seam.
#[must_use]
pub fn point_in_triangle(tri: &[DVec2; 3], p: DVec2) -> bool {
    let d0 = edge_sign(tri[0], tri[1], p);
    let d1 = edge_sign(tri[1], tri[2], p);
    let d2 = edge_sign(tri[2], tri[0], p);

    let has_neg = d0 < 0.0 || d1 < 0.0 || d2 < 0.0;
    let has_pos = d0 > 0.0 || d1 > 0.0 || d2 > 0.0;
    !(has_neg && has_pos)
}

/// Tests a quad face by splitting it into the triangles `[v0, v1, v2]` and
/// `[v0, v2, v3]`.
#[must_use]
pub fn point_in_quad(quad: &[DVec2; 4], p: DVec2) -> bool {
    point_in_triangle(&[quad[0], quad[1], quad[2]], p)
        || point_in_triangle(&[quad[0], quad[2], quad[3]], p)
}
