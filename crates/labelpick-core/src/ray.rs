//! View rays, coordinate mapping, and ray/plane intersection.
//!
//! The host viewer hands the picker a single affine scene-to-canvas matrix.
//! Everything else - the click position in scene coordinates, the viewing
//! direction, and the projected face corners - is derived from that matrix
//! and its inverse here.

use glam::{DMat4, DVec2, DVec3, DVec4};

use crate::error::{PickError, Result};
use crate::face::Face;

/// Tolerance for the homogeneous-coordinate affinity check.
pub const HOMOGENEOUS_TOLERANCE: f64 = 1e-5;

/// Below this, a direction component is treated as parallel to a face plane.
const PARALLEL_TOLERANCE: f64 = 1e-12;

/// A ray through the volume, (z, y, x) component order.
#[derive(Debug, Clone, Copy)]
pub struct ViewRay {
    /// A point on the ray (the mapped click position).
    pub origin: DVec3,
    /// Unit direction of the ray.
    pub direction: DVec3,
}

impl ViewRay {
    /// Creates a ray; the direction is normalized on construction.
    #[must_use]
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }
}

/// Swizzles a scene-space (x, y, z) vector into volume index order (z, y, x).
#[must_use]
pub fn scene_to_index(v: DVec3) -> DVec3 {
    DVec3::new(v.z, v.y, v.x)
}

/// Swizzles a volume-order (z, y, x) vector back into scene space (x, y, z).
#[must_use]
pub fn index_to_scene(v: DVec3) -> DVec3 {
    DVec3::new(v.z, v.y, v.x)
}

fn check_affine(p: DVec4) -> Result<()> {
    if (p.w - 1.0).abs() > HOMOGENEOUS_TOLERANCE {
        return Err(PickError::NonAffineTransform { w: p.w });
    }
    Ok(())
}

/// Computes the unit vector of the viewing direction in volume coordinates
/// (z, y, x order).
///
/// Inverse-maps the screen center and a point one unit "into the screen"
/// from it, then subtracts and normalizes. Both mapped points must be
/// affine (homogeneous w within [`HOMOGENEOUS_TOLERANCE`] of 1); otherwise
/// the interaction fails with [`PickError::NonAffineTransform`].
pub fn view_direction_in_volume(scene_to_canvas: DMat4, viewport: (f64, f64)) -> Result<DVec3> {
    let inverse = scene_to_canvas.inverse();
    let (w, h) = viewport;

    // In homogeneous canvas coordinates
    let screen_center = DVec4::new(w / 2.0, h / 2.0, 0.0, 1.0);
    let into_screen = screen_center + DVec4::new(0.0, 0.0, 1.0, 0.0);

    let p0 = inverse * screen_center;
    let p1 = inverse * into_screen;
    check_affine(p0)?;
    check_affine(p1)?;

    let d = p1 - p0;
    if d.w.abs() > HOMOGENEOUS_TOLERANCE {
        return Err(PickError::NonAffineTransform { w: d.w });
    }

    Ok(scene_to_index(d.truncate().normalize()))
}

/// Maps a 2D canvas position onto its pick ray in scene coordinates.
///
/// The result is some point on the ray through the click (its depth depends
/// on the host's depth convention); combined with the view direction it
/// determines the ray completely.
pub fn map_canvas_to_scene(scene_to_canvas: DMat4, canvas_pos: DVec2) -> Result<DVec3> {
    let p = scene_to_canvas.inverse() * DVec4::new(canvas_pos.x, canvas_pos.y, 0.0, 1.0);
    check_affine(p)?;
    Ok(p.truncate())
}

/// Projects a scene point to canvas coordinates with perspective divide.
#[must_use]
pub fn map_scene_to_canvas(scene_to_canvas: DMat4, point: DVec3) -> DVec2 {
    let p = scene_to_canvas * point.extend(1.0);
    DVec2::new(p.x / p.w, p.y / p.w)
}

/// Intersects a ray with the axis-aligned plane of `face` at `intercept`.
///
/// Solves `origin + t * dir` on the plane `dot(normal, x) = intercept` using
/// only the single nonzero axis of the face normal. Returns `None` when the
/// direction component along that axis is ~0 (ray parallel to the face);
/// callers already exclude near-perpendicular faces via the front/back
/// classification, so `None` here ends the pick as a miss.
#[must_use]
pub fn axis_aligned_plane_intersection(
    intercept: f64,
    face: Face,
    origin: DVec3,
    dir: DVec3,
) -> Option<DVec3> {
    let axis = face.axis();
    if dir[axis].abs() < PARALLEL_TOLERANCE {
        return None;
    }
    let t = (intercept - origin[axis]) / dir[axis];
    Some(origin + t * dir)
}
