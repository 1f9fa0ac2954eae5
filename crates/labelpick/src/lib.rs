//! Interactive ray-cast label picking for 3D voxel volumes.
//!
//! Click on a rendered volumetric label image to select the label under the
//! cursor, then drag vertically to walk the selection deeper or shallower
//! along the view ray. The host viewer supplies the camera transform, the
//! label volume, and a color-table sink; [`LabelPicker`] turns its pointer
//! events into highlight and restore commands:
//!
//! - **pointer-down**: cast a ray through the click, find the bounding-box
//!   faces it enters and leaves through, march between them, and dim every
//!   label except the first one hit;
//! - **pointer-move**: displace the sample point along the ray by the
//!   vertical drag distance and re-highlight if it lands in a new label;
//! - **pointer-up**: restore the pristine color table.
//!
//! Geometry primitives live in [`labelpick_core`] and are re-exported here.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Graphics code intentionally uses casts for indices and coordinates
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod host;
pub mod march;
pub mod picker;
pub mod volume;

pub use host::{PickHost, PointerEvent, PointerKind};
pub use march::march_ray;
pub use picker::{LabelPicker, PickOutcome};
pub use volume::LabelVolume;

// Re-export the geometry crate's surface for convenience
pub use labelpick_core::{
    BoundingBox, ColorTable, Face, PickError, PickerOptions, Result, ViewRay, DEFAULT_DIM_OPACITY,
};
