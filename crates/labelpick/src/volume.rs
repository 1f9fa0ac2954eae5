//! Dense 3D label volumes.

use std::collections::BTreeSet;

use glam::IVec3;
use labelpick_core::{BoundingBox, PickError, Result};

/// A dense 3-dimensional array of integer label ids.
///
/// Values are stored C-contiguously in (z, y, x) order: the label for voxel
/// (z, y, x) lives at index `(z * ny + y) * nx + x`. Label 0 is background.
/// The picker only ever reads a volume; ownership stays with the host viewer.
#[derive(Debug, Clone)]
pub struct LabelVolume {
    data: Vec<u32>,
    /// (nz, ny, nx)
    shape: (usize, usize, usize),
}

impl LabelVolume {
    /// Creates a volume from raw data and its (nz, ny, nx) shape.
    ///
    /// Returns [`PickError::SizeMismatch`] if the data length does not match
    /// the shape.
    pub fn new(data: Vec<u32>, shape: (usize, usize, usize)) -> Result<Self> {
        let expected = shape.0 * shape.1 * shape.2;
        if data.len() != expected {
            return Err(PickError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { data, shape })
    }

    /// Creates an all-background volume of the given shape.
    #[must_use]
    pub fn zeros(shape: (usize, usize, usize)) -> Self {
        Self {
            data: vec![0; shape.0 * shape.1 * shape.2],
            shape,
        }
    }

    /// The (nz, ny, nx) shape.
    #[must_use]
    pub fn shape(&self) -> (usize, usize, usize) {
        self.shape
    }

    /// The label at `index` ((z, y, x) component order), or 0 (background)
    /// for out-of-range indices. Ray-march samples are clamped before lookup,
    /// but the clamp range includes the exclusive upper bound of the box, so
    /// the guarded read here is what keeps every access in range.
    #[must_use]
    pub fn label_at(&self, index: IVec3) -> u32 {
        let (nz, ny, nx) = self.shape;
        let [z, y, x] = index.to_array();
        if z < 0 || y < 0 || x < 0 {
            return 0;
        }
        let (z, y, x) = (z as usize, y as usize, x as usize);
        if z >= nz || y >= ny || x >= nx {
            return 0;
        }
        self.data[(z * ny + y) * nx + x]
    }

    /// Sets the label at (z, y, x). Out-of-range writes are ignored.
    pub fn set_label(&mut self, index: IVec3, label: u32) {
        let (nz, ny, nx) = self.shape;
        let [z, y, x] = index.to_array();
        if z < 0 || y < 0 || x < 0 {
            return;
        }
        let (z, y, x) = (z as usize, y as usize, x as usize);
        if z < nz && y < ny && x < nx {
            self.data[(z * ny + y) * nx + x] = label;
        }
    }

    /// The bounding box of this volume in index space.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_shape(self.shape)
    }

    /// The distinct label values present in the volume, sorted ascending.
    /// Includes 0 when any voxel is background; useful for seeding a color
    /// table from the data.
    #[must_use]
    pub fn unique_labels(&self) -> Vec<u32> {
        let set: BTreeSet<u32> = self.data.iter().copied().collect();
        set.into_iter().collect()
    }
}
