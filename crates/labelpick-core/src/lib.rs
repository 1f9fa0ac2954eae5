//! Core geometry for labelpick-rs.
//!
//! This crate provides the pure-geometry building blocks used by the picker
//! engine:
//! - [`Face`] and its static normal/intercept tables
//! - [`BoundingBox`] construction, inflation, and clamping
//! - 2D point-in-triangle tests for face hit-testing
//! - Ray/plane intersection and view-direction extraction
//! - [`ColorTable`] snapshots and opacity dimming
//!
//! Vectors in volume space use (z, y, x) component order throughout, matching
//! the array indexing of the label volume; canvas/scene vectors are ordinary
//! (x, y, z).

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod bbox;
pub mod color_table;
pub mod error;
pub mod face;
pub mod options;
pub mod ray;
pub mod triangle;

pub use bbox::BoundingBox;
pub use color_table::{ColorTable, DEFAULT_DIM_OPACITY};
pub use error::{PickError, Result};
pub use face::Face;
pub use options::PickerOptions;
pub use ray::{
    axis_aligned_plane_intersection, index_to_scene, map_canvas_to_scene, map_scene_to_canvas,
    scene_to_index, view_direction_in_volume, ViewRay, HOMOGENEOUS_TOLERANCE,
};
pub use triangle::{point_in_quad, point_in_triangle};

// Re-export glam types for convenience
pub use glam::{DMat4, DVec2, DVec3, DVec4};
