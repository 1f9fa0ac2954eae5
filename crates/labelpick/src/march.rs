//! Ray-marching through a label volume.

use glam::{DVec3, IVec3};
use labelpick_core::BoundingBox;

use crate::volume::LabelVolume;

/// Truncates a continuous sample position to voxel indices, clamped to the
/// bounding box so array lookups stay in range.
pub(crate) fn truncate_to_voxel(bbox: &BoundingBox, point: DVec3) -> IVec3 {
    bbox.clamp(point.trunc()).as_ivec3()
}

/// Marches from `near` to `far` and returns the first voxel holding a
/// non-background label, together with the sample index it was found at.
///
/// Sampling runs at two samples per unit of ray length so thin, single-voxel
/// label regions along the ray cannot be skipped. Sample coordinates are
/// truncated to integers and clamped to the bounding box before lookup.
///
/// Returns `None` for a degenerate (shorter than half a unit) ray or when
/// every sample along the ray is background; neither case divides by zero or
/// touches the volume out of range.
#[must_use]
pub fn march_ray(
    volume: &LabelVolume,
    bbox: &BoundingBox,
    near: DVec3,
    far: DVec3,
) -> Option<(IVec3, u32)> {
    let sample_vector = far - near;
    let length = sample_vector.length();
    let n_steps = (2.0 * length).floor() as i64;
    if n_steps == 0 {
        return None;
    }
    let increment = sample_vector / (2.0 * length);

    for i in 0..n_steps {
        let sample = truncate_to_voxel(bbox, near + i as f64 * increment);
        let value = volume.label_at(sample);
        if value != 0 {
            return Some((sample, value));
        }
    }
    None
}

/// The per-sample increment of [`march_ray`] for the same `near`/`far` pair,
/// or `None` for a degenerate ray. Drag updates displace the anchor sample
/// by multiples of this vector.
#[must_use]
pub fn march_increment(near: DVec3, far: DVec3) -> Option<DVec3> {
    let sample_vector = far - near;
    let length = sample_vector.length();
    if (2.0 * length).floor() as i64 == 0 {
        return None;
    }
    Some(sample_vector / (2.0 * length))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_voxel_volume() -> LabelVolume {
        let mut volume = LabelVolume::zeros((10, 10, 10));
        volume.set_label(IVec3::new(5, 5, 5), 7);
        volume
    }

    #[test]
    fn test_march_hits_single_voxel() {
        let volume = single_voxel_volume();
        let bbox = volume.bounding_box();
        // Straight ray along +x through the voxel center
        let near = DVec3::new(5.5, 5.5, 0.0);
        let far = DVec3::new(5.5, 5.5, 10.0);
        let (sample, value) = march_ray(&volume, &bbox, near, far).expect("ray crosses the voxel");
        assert_eq!(value, 7);
        assert_eq!(sample, IVec3::new(5, 5, 5));
    }

    #[test]
    fn test_march_hits_along_diagonal() {
        let volume = single_voxel_volume();
        let bbox = volume.bounding_box();
        let near = DVec3::splat(10.0);
        let far = DVec3::splat(0.0);
        let (sample, value) = march_ray(&volume, &bbox, near, far).expect("diagonal crosses");
        assert_eq!(value, 7);
        assert_eq!(sample, IVec3::new(5, 5, 5));
    }

    #[test]
    fn test_march_misses_offset_ray() {
        let volume = single_voxel_volume();
        let bbox = volume.bounding_box();
        let near = DVec3::new(2.5, 2.5, 0.0);
        let far = DVec3::new(2.5, 2.5, 10.0);
        assert!(march_ray(&volume, &bbox, near, far).is_none());
    }

    #[test]
    fn test_march_degenerate_ray() {
        let volume = single_voxel_volume();
        let bbox = volume.bounding_box();
        let p = DVec3::splat(5.5);
        // Zero-length and sub-half-unit rays short-circuit to no pick
        assert!(march_ray(&volume, &bbox, p, p).is_none());
        assert!(march_ray(&volume, &bbox, p, p + DVec3::new(0.0, 0.0, 0.2)).is_none());
        assert!(march_increment(p, p).is_none());
    }

    #[test]
    fn test_march_does_not_skip_thin_region() {
        // One voxel thick along the ray; oversampling at half-unit steps
        // must land inside it no matter the fractional start.
        let mut volume = LabelVolume::zeros((3, 3, 20));
        volume.set_label(IVec3::new(1, 1, 13), 4);
        let bbox = volume.bounding_box();
        for offset in [0.0, 0.1, 0.3, 0.49, 0.7, 0.9] {
            let near = DVec3::new(1.5, 1.5, offset);
            let far = DVec3::new(1.5, 1.5, 20.0);
            let hit = march_ray(&volume, &bbox, near, far);
            assert!(hit.is_some(), "missed with start offset {offset}");
        }
    }

    #[test]
    fn test_truncate_clamps_into_box() {
        let bbox = BoundingBox::from_shape((10, 10, 10));
        assert_eq!(
            truncate_to_voxel(&bbox, DVec3::new(-2.7, 4.6, 11.2)),
            IVec3::new(0, 4, 10)
        );
        // Truncation, not rounding
        assert_eq!(
            truncate_to_voxel(&bbox, DVec3::new(4.9, 4.9, 4.9)),
            IVec3::new(4, 4, 4)
        );
    }
}
