//! Axis-aligned bounding boxes in volume index space.

use glam::DVec3;

use crate::face::Face;

/// An axis-aligned bounding box in array-index space, (z, y, x) order.
///
/// Boxes are cheap to rebuild from a volume shape, so they are derived per
/// interaction rather than cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    min: DVec3,
    max: DVec3,
}

impl BoundingBox {
    /// Creates a bounding box from its corner points.
    #[must_use]
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// The bounding box of a volume with the given (nz, ny, nx) shape.
    #[must_use]
    pub fn from_shape(shape: (usize, usize, usize)) -> Self {
        Self {
            min: DVec3::ZERO,
            max: DVec3::new(shape.0 as f64, shape.1 as f64, shape.2 as f64),
        }
    }

    /// Minimum corner, (z, y, x) order.
    #[must_use]
    pub fn min(&self) -> DVec3 {
        self.min
    }

    /// Maximum corner, (z, y, x) order.
    #[must_use]
    pub fn max(&self) -> DVec3 {
        self.max
    }

    /// Returns this box grown by `amount` on every side.
    #[must_use]
    pub fn inflate(&self, amount: f64) -> Self {
        Self {
            min: self.min - DVec3::splat(amount),
            max: self.max + DVec3::splat(amount),
        }
    }

    /// Clamps each coordinate of `point` into the box. Idempotent.
    #[must_use]
    pub fn clamp(&self, point: DVec3) -> DVec3 {
        point.clamp(self.min, self.max)
    }

    /// Whether `point` lies inside the box (boundary inclusive).
    #[must_use]
    pub fn contains(&self, point: DVec3) -> bool {
        self.clamp(point) == point
    }

    /// The 4 ordered corners of `face` on this box inflated by one unit, so
    /// the face plane sits just outside the data and every ray entering the
    /// volume crosses two distinct faces.
    ///
    /// The winding is fixed so the quad splits into triangles `[v0, v1, v2]`
    /// and `[v0, v2, v3]`.
    #[must_use]
    pub fn face_vertices(&self, face: Face) -> [DVec3; 4] {
        let inflated = self.inflate(1.0);
        let (z0, y0, x0) = (inflated.min[0], inflated.min[1], inflated.min[2]);
        let (z1, y1, x1) = (inflated.max[0], inflated.max[1], inflated.max[2]);

        match face {
            Face::XPos => [
                DVec3::new(z0, y0, x1),
                DVec3::new(z0, y1, x1),
                DVec3::new(z1, y1, x1),
                DVec3::new(z1, y0, x1),
            ],
            Face::XNeg => [
                DVec3::new(z0, y0, x0),
                DVec3::new(z0, y1, x0),
                DVec3::new(z1, y1, x0),
                DVec3::new(z1, y0, x0),
            ],
            Face::YPos => [
                DVec3::new(z0, y1, x0),
                DVec3::new(z0, y1, x1),
                DVec3::new(z1, y1, x1),
                DVec3::new(z1, y1, x0),
            ],
            Face::YNeg => [
                DVec3::new(z0, y0, x0),
                DVec3::new(z0, y0, x1),
                DVec3::new(z1, y0, x1),
                DVec3::new(z1, y0, x0),
            ],
            Face::ZPos => [
                DVec3::new(z1, y0, x0),
                DVec3::new(z1, y0, x1),
                DVec3::new(z1, y1, x1),
                DVec3::new(z1, y1, x0),
            ],
            Face::ZNeg => [
                DVec3::new(z0, y0, x0),
                DVec3::new(z0, y0, x1),
                DVec3::new(z0, y1, x1),
                DVec3::new(z0, y1, x0),
            ],
        }
    }
}
