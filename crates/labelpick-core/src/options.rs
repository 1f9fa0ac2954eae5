//! Configuration options for the picker.

use serde::{Deserialize, Serialize};

use crate::color_table::DEFAULT_DIM_OPACITY;

/// Tunable parameters for the picker engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PickerOptions {
    /// Opacity applied to non-selected labels while a pick is armed.
    pub dim_opacity: f64,

    /// Faces with `|dot(view_dir, normal)|` at or below this are skipped as
    /// near-perpendicular to the view ray; their plane intersection would be
    /// unreliable.
    pub face_epsilon: f64,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            dim_opacity: DEFAULT_DIM_OPACITY,
            face_epsilon: 1e-3,
        }
    }
}
