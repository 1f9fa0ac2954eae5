//! The ray-casting picker state machine.
//!
//! One [`LabelPicker`] serves one label layer. The host forwards pointer
//! events; the picker is Idle between gestures and Armed from a successful
//! pointer-down until the matching pointer-up.

use glam::{DMat4, DVec2, DVec3, IVec3};
use labelpick_core::{
    axis_aligned_plane_intersection, index_to_scene, map_canvas_to_scene, map_scene_to_canvas,
    point_in_quad, scene_to_index, view_direction_in_volume, BoundingBox, ColorTable, Face,
    PickerOptions, Result, ViewRay,
};
use log::{debug, trace};

use crate::host::{PickHost, PointerEvent, PointerKind};
use crate::march::{march_increment, march_ray, truncate_to_voxel};

/// Outcome of dispatching one pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    /// The event did not apply to the current state (e.g. a move while idle).
    Ignored,
    /// A pointer-down hit no labeled voxel; the picker stays idle and the
    /// host is untouched.
    Missed,
    /// A label was picked and is now highlighted.
    Picked(u32),
    /// A drag moved the highlight to a different label.
    Updated(u32),
    /// A drag sample hit background or the already-selected label; the
    /// highlight is unchanged.
    Unchanged,
    /// The gesture ended and the original colors were restored.
    Released,
}

/// Ephemeral state alive between pointer-down and pointer-up.
#[derive(Debug, Clone)]
struct PickSession {
    front_face: Face,
    back_face: Face,
    /// Per-sample step along the ray (half a unit of ray length).
    increment: DVec3,
    /// Sample point recorded at pick time; drag displacement applies to it.
    anchor_sample: DVec3,
    /// Most recent sample voxel.
    current_sample: IVec3,
    /// Currently highlighted label.
    label: u32,
    /// Canvas y of the pointer-down; drag displacement is measured from it.
    origin_canvas_y: f64,
    /// Pristine pre-gesture color table, restored when the gesture ends.
    snapshot: ColorTable,
}

/// The interactive label picker.
///
/// Create one per label layer and feed it the layer's pointer events via
/// [`LabelPicker::handle_pointer_event`]. The picker owns no volume or color
/// data outside a gesture; during one it holds only the session state and
/// the color snapshot it will restore.
#[derive(Debug, Default)]
pub struct LabelPicker {
    options: PickerOptions,
    session: Option<PickSession>,
}

impl LabelPicker {
    /// Creates a picker with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a picker with the given options.
    #[must_use]
    pub fn with_options(options: PickerOptions) -> Self {
        Self {
            options,
            session: None,
        }
    }

    /// The picker's options.
    #[must_use]
    pub fn options(&self) -> &PickerOptions {
        &self.options
    }

    /// Whether a gesture is in progress with a label highlighted.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.session.is_some()
    }

    /// The currently highlighted label, if armed.
    #[must_use]
    pub fn selected_label(&self) -> Option<u32> {
        self.session.as_ref().map(|s| s.label)
    }

    /// The (front, back) face pair of the current gesture, if armed.
    #[must_use]
    pub fn face_pair(&self) -> Option<(Face, Face)> {
        self.session.as_ref().map(|s| (s.front_face, s.back_face))
    }

    /// The most recent sample voxel ((z, y, x) order), if armed.
    #[must_use]
    pub fn current_sample(&self) -> Option<IVec3> {
        self.session.as_ref().map(|s| s.current_sample)
    }

    /// Dispatches one pointer event against the current state.
    ///
    /// Safe to call with any event in any state; events that do not apply
    /// return [`PickOutcome::Ignored`]. The only error is a non-affine view
    /// transform on pointer-down, which aborts the pick before any host
    /// mutation.
    pub fn handle_pointer_event(
        &mut self,
        host: &mut dyn PickHost,
        event: &PointerEvent,
    ) -> Result<PickOutcome> {
        match event.kind {
            PointerKind::Down => self.on_pointer_down(host, event.canvas_pos),
            PointerKind::Move => Ok(self.on_pointer_move(host, event.canvas_pos)),
            PointerKind::Up => Ok(self.on_pointer_up(host)),
        }
    }

    /// Cancels any gesture in progress, restoring the color snapshot and
    /// interactivity. Best-effort hook for external invalidation (e.g. the
    /// layer being removed mid-gesture); a no-op when idle.
    pub fn cancel(&mut self, host: &mut dyn PickHost) {
        if let Some(session) = self.session.take() {
            debug!("pick gesture cancelled, restoring colors");
            host.set_color_table(session.snapshot);
            host.set_interactive(true);
        }
    }

    fn on_pointer_down(&mut self, host: &mut dyn PickHost, canvas_pos: DVec2) -> Result<PickOutcome> {
        // A second pointer-down while armed restarts the gesture cleanly
        // instead of leaking the stale recolor.
        self.cancel(host);

        let transform = host.scene_to_canvas();
        let view_dir = view_direction_in_volume(transform, host.viewport_size())?;
        let click_scene = map_canvas_to_scene(transform, canvas_pos)?;
        let ray = ViewRay::new(scene_to_index(click_scene), view_dir);
        trace!("view direction (z, y, x): {view_dir}");

        let bbox = host.volume().bounding_box();
        let Some((front_face, back_face)) =
            find_face_pair(&bbox, transform, view_dir, canvas_pos, self.options.face_epsilon)
        else {
            return Ok(PickOutcome::Missed);
        };
        debug!("front face {}, back face {}", front_face.name(), back_face.name());

        // Entry and exit points of the ray on the raw bounding box
        let near = axis_aligned_plane_intersection(
            front_face.intercept(&bbox),
            front_face,
            ray.origin,
            -ray.direction,
        );
        let far = axis_aligned_plane_intersection(
            back_face.intercept(&bbox),
            back_face,
            ray.origin,
            ray.direction,
        );
        let (Some(near_point), Some(far_point)) = (near, far) else {
            return Ok(PickOutcome::Missed);
        };
        trace!("near point {near_point}, far point {far_point}");

        let Some((sample, label)) = march_ray(host.volume(), &bbox, near_point, far_point) else {
            return Ok(PickOutcome::Missed);
        };
        let increment = march_increment(near_point, far_point)
            .unwrap_or(DVec3::ZERO);
        debug!("picked label {label} at sample {sample}");

        let snapshot = host.color_table().clone();
        host.set_color_table(snapshot.dimmed_except(label, self.options.dim_opacity));
        host.set_interactive(false);

        self.session = Some(PickSession {
            front_face,
            back_face,
            increment,
            anchor_sample: sample.as_dvec3(),
            current_sample: sample,
            label,
            origin_canvas_y: canvas_pos.y,
            snapshot,
        });
        Ok(PickOutcome::Picked(label))
    }

    fn on_pointer_move(&mut self, host: &mut dyn PickHost, canvas_pos: DVec2) -> PickOutcome {
        let Some(session) = self.session.as_mut() else {
            return PickOutcome::Ignored;
        };

        // Vertical drag distance from the gesture origin, applied to the
        // anchor sample; measuring from the origin keeps successive moves
        // from compounding.
        let displacement = session.origin_canvas_y - canvas_pos.y;
        let bbox = host.volume().bounding_box();
        let sample =
            truncate_to_voxel(&bbox, session.anchor_sample + displacement * session.increment);
        let value = host.volume().label_at(sample);
        trace!("drag displacement {displacement}, sample {sample}, label {value}");

        if value == 0 || value == session.label {
            return PickOutcome::Unchanged;
        }

        session.label = value;
        session.current_sample = sample;
        let recolored = session
            .snapshot
            .dimmed_except(value, self.options.dim_opacity);
        host.set_color_table(recolored);
        PickOutcome::Updated(value)
    }

    fn on_pointer_up(&mut self, host: &mut dyn PickHost) -> PickOutcome {
        match self.session.take() {
            Some(session) => {
                debug!("gesture ended, restoring colors for label {}", session.label);
                host.set_color_table(session.snapshot);
                host.set_interactive(true);
                PickOutcome::Released
            }
            None => PickOutcome::Ignored,
        }
    }
}

/// Finds the bounding-box faces the view ray enters and leaves through.
///
/// Each face is classified against the view direction: front when the ray
/// points into the volume through it (`dot < -epsilon`), back when it points
/// out (`dot > epsilon`), skipped when near-perpendicular. Candidates are
/// accepted when their projected quad contains the click; the first match in
/// [`Face::ALL`] order wins on each side, so numerical overlap at shared
/// edges cannot flip the result mid-scan.
fn find_face_pair(
    bbox: &BoundingBox,
    transform: DMat4,
    view_dir: DVec3,
    canvas_pos: DVec2,
    epsilon: f64,
) -> Option<(Face, Face)> {
    let mut front = None;
    let mut back = None;

    for face in Face::ALL {
        let alignment = view_dir.dot(face.normal());
        if alignment < -epsilon {
            if front.is_none() && point_in_quad(&project_face(bbox, face, transform), canvas_pos) {
                front = Some(face);
            }
        } else if alignment > epsilon {
            if back.is_none() && point_in_quad(&project_face(bbox, face, transform), canvas_pos) {
                back = Some(face);
            }
        }
        if front.is_some() && back.is_some() {
            break;
        }
    }

    front.zip(back)
}

/// Projects the 4 corners of a face quad into canvas coordinates.
fn project_face(bbox: &BoundingBox, face: Face, transform: DMat4) -> [DVec2; 4] {
    bbox.face_vertices(face)
        .map(|v| map_scene_to_canvas(transform, index_to_scene(v)))
}

#[cfg(test)]
mod tests {
    use labelpick_core::PickError;

    use crate::volume::LabelVolume;

    use super::*;

    /// Minimal host: identity-ish orthographic view looking along scene +z.
    struct FlatHost {
        volume: LabelVolume,
        colors: ColorTable,
        interactive: bool,
    }

    impl FlatHost {
        fn new(volume: LabelVolume) -> Self {
            let colors = ColorTable::from_labels(
                volume.unique_labels().into_iter().filter(|&l| l != 0),
                |_| glam::DVec4::ONE,
            );
            Self {
                volume,
                colors,
                interactive: true,
            }
        }
    }

    impl PickHost for FlatHost {
        fn volume(&self) -> &LabelVolume {
            &self.volume
        }
        fn color_table(&self) -> &ColorTable {
            &self.colors
        }
        fn set_color_table(&mut self, table: ColorTable) {
            self.colors = table;
        }
        fn set_interactive(&mut self, interactive: bool) {
            self.interactive = interactive;
        }
        fn scene_to_canvas(&self) -> DMat4 {
            // Scene x/y map directly to canvas pixels; +z goes into the
            // screen. Affine, w stays 1.
            DMat4::IDENTITY
        }
        fn viewport_size(&self) -> (f64, f64) {
            (100.0, 100.0)
        }
    }

    fn blob_volume() -> LabelVolume {
        // Shape (8, 8, 8) with label 3 filling (2..6, 2..6, 2..6)
        let mut volume = LabelVolume::zeros((8, 8, 8));
        for z in 2..6 {
            for y in 2..6 {
                for x in 2..6 {
                    volume.set_label(IVec3::new(z, y, x), 3);
                }
            }
        }
        volume
    }

    #[test]
    fn test_move_and_up_while_idle_are_ignored() {
        let mut host = FlatHost::new(blob_volume());
        let mut picker = LabelPicker::new();
        let pos = DVec2::new(4.0, 4.0);
        assert_eq!(
            picker.handle_pointer_event(&mut host, &PointerEvent::moved(pos)).unwrap(),
            PickOutcome::Ignored
        );
        assert_eq!(
            picker.handle_pointer_event(&mut host, &PointerEvent::up(pos)).unwrap(),
            PickOutcome::Ignored
        );
        assert!(host.interactive);
    }

    #[test]
    fn test_click_through_blob_picks_label() {
        let mut host = FlatHost::new(blob_volume());
        let mut picker = LabelPicker::new();

        // Identity transform: canvas (4, 4) is scene (4, 4), ray along +z,
        // volume order (z, y, x) = (marching axis, 4, 4).
        let outcome = picker
            .handle_pointer_event(&mut host, &PointerEvent::down(DVec2::new(4.0, 4.0)))
            .unwrap();
        assert_eq!(outcome, PickOutcome::Picked(3));
        assert!(picker.is_armed());
        assert_eq!(picker.selected_label(), Some(3));
        assert!(!host.interactive);
    }

    #[test]
    fn test_click_outside_faces_misses() {
        let mut host = FlatHost::new(blob_volume());
        let mut picker = LabelPicker::new();
        let outcome = picker
            .handle_pointer_event(&mut host, &PointerEvent::down(DVec2::new(50.0, 50.0)))
            .unwrap();
        assert_eq!(outcome, PickOutcome::Missed);
        assert!(!picker.is_armed());
        assert!(host.interactive);
    }

    #[test]
    fn test_click_through_empty_corner_misses() {
        // Inside the face quads but outside the blob
        let mut host = FlatHost::new(blob_volume());
        let mut picker = LabelPicker::new();
        let outcome = picker
            .handle_pointer_event(&mut host, &PointerEvent::down(DVec2::new(0.5, 0.5)))
            .unwrap();
        assert_eq!(outcome, PickOutcome::Missed);
        let snapshot = host.colors.clone();
        let _ = picker.handle_pointer_event(&mut host, &PointerEvent::up(DVec2::new(0.5, 0.5)));
        assert_eq!(host.colors, snapshot);
    }

    #[test]
    fn test_second_down_restarts_gesture() {
        let mut host = FlatHost::new(blob_volume());
        let pristine = host.colors.clone();
        let mut picker = LabelPicker::new();

        let down = PointerEvent::down(DVec2::new(4.0, 4.0));
        assert_eq!(
            picker.handle_pointer_event(&mut host, &down).unwrap(),
            PickOutcome::Picked(3)
        );
        // Second down without an up: colors must not be double-dimmed
        assert_eq!(
            picker.handle_pointer_event(&mut host, &down).unwrap(),
            PickOutcome::Picked(3)
        );
        let _ = picker.handle_pointer_event(&mut host, &PointerEvent::up(DVec2::new(4.0, 4.0)));
        assert_eq!(host.colors, pristine);
        assert!(host.interactive);
    }

    #[test]
    fn test_cancel_restores_colors() {
        let mut host = FlatHost::new(blob_volume());
        let pristine = host.colors.clone();
        let mut picker = LabelPicker::new();

        let _ = picker.handle_pointer_event(&mut host, &PointerEvent::down(DVec2::new(4.0, 4.0)));
        assert!(picker.is_armed());
        picker.cancel(&mut host);
        assert!(!picker.is_armed());
        assert_eq!(host.colors, pristine);
        assert!(host.interactive);
    }

    #[test]
    fn test_non_affine_transform_fails_before_mutation() {
        struct PerspectiveHost(FlatHost);
        impl PickHost for PerspectiveHost {
            fn volume(&self) -> &LabelVolume {
                self.0.volume()
            }
            fn color_table(&self) -> &ColorTable {
                self.0.color_table()
            }
            fn set_color_table(&mut self, table: ColorTable) {
                self.0.set_color_table(table);
            }
            fn set_interactive(&mut self, interactive: bool) {
                self.0.set_interactive(interactive);
            }
            fn scene_to_canvas(&self) -> DMat4 {
                DMat4::perspective_rh(1.0, 1.0, 0.1, 100.0)
            }
            fn viewport_size(&self) -> (f64, f64) {
                (2.0, 2.0)
            }
        }

        let mut host = PerspectiveHost(FlatHost::new(blob_volume()));
        let pristine = host.0.colors.clone();
        let mut picker = LabelPicker::new();
        let result =
            picker.handle_pointer_event(&mut host, &PointerEvent::down(DVec2::new(1.0, 1.0)));
        assert!(matches!(result, Err(PickError::NonAffineTransform { .. })));
        assert!(!picker.is_armed());
        assert_eq!(host.0.colors, pristine);
        assert!(host.0.interactive);
    }
}
