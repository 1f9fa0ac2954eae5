//! The host-viewer contract and pointer events.

use glam::{DMat4, DVec2};
use labelpick_core::ColorTable;

use crate::volume::LabelVolume;

/// Kind of a pointer event within one gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Button press / drag start.
    Down,
    /// Drag motion while the button is held.
    Move,
    /// Button release / gesture end.
    Up,
}

/// A pointer event in canvas pixel coordinates.
///
/// The host delivers the events of one gesture in order (down, zero or more
/// moves, up) before the next gesture begins.
#[derive(Debug, Clone, Copy)]
pub struct PointerEvent {
    /// What happened.
    pub kind: PointerKind,
    /// Canvas position of the pointer.
    pub canvas_pos: DVec2,
}

impl PointerEvent {
    /// A pointer-down event.
    #[must_use]
    pub fn down(canvas_pos: DVec2) -> Self {
        Self {
            kind: PointerKind::Down,
            canvas_pos,
        }
    }

    /// A pointer-move event.
    #[must_use]
    pub fn moved(canvas_pos: DVec2) -> Self {
        Self {
            kind: PointerKind::Move,
            canvas_pos,
        }
    }

    /// A pointer-up event.
    #[must_use]
    pub fn up(canvas_pos: DVec2) -> Self {
        Self {
            kind: PointerKind::Up,
            canvas_pos,
        }
    }
}

/// The viewer hosting the label layer.
///
/// The picker is purely reactive: it pulls the volume, color table, and view
/// transform from the host on each event and pushes highlight/restore
/// commands back. It holds no reference to the host between events, so the
/// host is free to mutate its scene in the meantime.
pub trait PickHost {
    /// Read access to the voxel labels.
    fn volume(&self) -> &LabelVolume;

    /// The current per-label color table.
    fn color_table(&self) -> &ColorTable;

    /// Replaces the per-label color table.
    fn set_color_table(&mut self, table: ColorTable);

    /// Toggles whether the layer accepts pointer routing from the rest of
    /// the UI. The picker disables this for the duration of a gesture.
    fn set_interactive(&mut self, interactive: bool);

    /// The scene-to-canvas transform. Must be affine (homogeneous w ~= 1);
    /// its inverse maps canvas points back into the scene.
    fn scene_to_canvas(&self) -> DMat4;

    /// Viewport size in pixels (width, height).
    fn viewport_size(&self) -> (f64, f64);
}
