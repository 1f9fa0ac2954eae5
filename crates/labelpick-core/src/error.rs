//! Error types for labelpick-rs.

use thiserror::Error;

/// The main error type for labelpick-rs operations.
#[derive(Error, Debug)]
pub enum PickError {
    /// The view transform failed the affinity precondition.
    ///
    /// Extracting the view direction requires an affine scene/canvas
    /// transform; a homogeneous coordinate far from 1 means the transform
    /// involves a perspective divide the picker cannot invert here. The
    /// interaction is aborted, never silently corrected.
    #[error("view transform is not affine: homogeneous w = {w}, expected ~1")]
    NonAffineTransform { w: f64 },

    /// Volume data size does not match the declared shape.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// A specialized Result type for labelpick-rs operations.
pub type Result<T> = std::result::Result<T, PickError>;
