//! Bounding-box faces and their static geometry tables.

use glam::DVec3;

use crate::bbox::BoundingBox;

/// One of the 6 axis-aligned faces of a volume's bounding box.
///
/// `XPos` is the face at the maximum x index, `XNeg` at the minimum, and so
/// on. Normals and intercept selectors are fixed tables shared by every pick
/// session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    /// Face at the maximum x index.
    XPos,
    /// Face at the minimum x index.
    XNeg,
    /// Face at the maximum y index.
    YPos,
    /// Face at the minimum y index.
    YNeg,
    /// Face at the maximum z index.
    ZPos,
    /// Face at the minimum z index.
    ZNeg,
}

impl Face {
    /// All faces in fixed scan order.
    pub const ALL: [Face; 6] = [
        Face::XPos,
        Face::XNeg,
        Face::YPos,
        Face::YNeg,
        Face::ZPos,
        Face::ZNeg,
    ];

    /// Outward unit normal in (z, y, x) component order.
    #[must_use]
    pub fn normal(self) -> DVec3 {
        match self {
            Face::XPos => DVec3::new(0.0, 0.0, 1.0),
            Face::XNeg => DVec3::new(0.0, 0.0, -1.0),
            Face::YPos => DVec3::new(0.0, 1.0, 0.0),
            Face::YNeg => DVec3::new(0.0, -1.0, 0.0),
            Face::ZPos => DVec3::new(1.0, 0.0, 0.0),
            Face::ZNeg => DVec3::new(-1.0, 0.0, 0.0),
        }
    }

    /// Index of the axis this face is perpendicular to (0 = z, 1 = y, 2 = x).
    #[must_use]
    pub fn axis(self) -> usize {
        match self {
            Face::ZPos | Face::ZNeg => 0,
            Face::YPos | Face::YNeg => 1,
            Face::XPos | Face::XNeg => 2,
        }
    }

    /// Whether this face sits at the maximum end of its axis.
    #[must_use]
    pub fn is_max(self) -> bool {
        matches!(self, Face::XPos | Face::YPos | Face::ZPos)
    }

    /// The plane offset of this face along its axis, read from the raw
    /// (un-inflated) bounding box.
    #[must_use]
    pub fn intercept(self, bbox: &BoundingBox) -> f64 {
        if self.is_max() {
            bbox.max()[self.axis()]
        } else {
            bbox.min()[self.axis()]
        }
    }

    /// Display name for logs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Face::XPos => "x_pos",
            Face::XNeg => "x_neg",
            Face::YPos => "y_pos",
            Face::YNeg => "y_neg",
            Face::ZPos => "z_pos",
            Face::ZNeg => "z_neg",
        }
    }
}
