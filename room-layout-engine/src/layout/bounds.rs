use bevy::math::Isometry3d;
use bevy::math::bounding::{Aabb3d, Bounded3d};
use bevy::math::primitives::Cuboid;

use super::furniture::PlacedFurniture;

/// World-space AABB of a piece at its current position and rotation.
///
/// The box is the tightest axis-aligned box around the rotated prism, so
/// rotation widens it. Cylinders use their enclosing box. Returns `None`
/// for degenerate pieces (non-finite values or a non-positive extent);
/// those never collide.
pub fn bounds_of(item: &PlacedFurniture) -> Option<Aabb3d> {
    let extents = item.extents();
    let rotation = item.rotation();

    if !extents.is_finite() || !item.position.is_finite() || !rotation.is_finite() {
        return None;
    }
    if extents.min_element() <= 0.0 {
        return None;
    }

    Some(Cuboid::from_size(extents).aabb_3d(Isometry3d::new(item.position, rotation)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::furniture::tests::record;
    use bevy::math::{Vec3, Vec3A};
    use layout_store::ShapeKind;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    const EPS: f32 = 1e-5;

    fn placed(kind: ShapeKind, position: [f32; 3], size: [f32; 3], rotation: Option<[f32; 3]>) -> PlacedFurniture {
        let mut r = record("item", kind, position, size);
        r.rotation = rotation;
        PlacedFurniture::from_record(r)
    }

    fn assert_aabb(aabb: Aabb3d, min: Vec3, max: Vec3) {
        assert!(
            aabb.min.abs_diff_eq(Vec3A::from(min), EPS),
            "min {:?} != {:?}",
            aabb.min,
            min
        );
        assert!(
            aabb.max.abs_diff_eq(Vec3A::from(max), EPS),
            "max {:?} != {:?}",
            aabb.max,
            max
        );
    }

    #[test]
    fn unrotated_box_is_centred_on_position() {
        let item = placed(ShapeKind::Box, [-3.0, 0.0, 0.0], [5.0, 1.0, 5.0], None);
        let aabb = bounds_of(&item).unwrap();
        assert_aabb(aabb, Vec3::new(-5.5, -0.5, -2.5), Vec3::new(-0.5, 0.5, 2.5));
    }

    #[test]
    fn quarter_turn_swaps_width_and_depth() {
        let item = placed(
            ShapeKind::Box,
            [0.0; 3],
            [2.0, 1.0, 4.0],
            Some([0.0, FRAC_PI_2, 0.0]),
        );
        let aabb = bounds_of(&item).unwrap();
        assert_aabb(aabb, Vec3::new(-2.0, -0.5, -1.0), Vec3::new(2.0, 0.5, 1.0));
    }

    #[test]
    fn diagonal_rotation_widens_box() {
        let item = placed(
            ShapeKind::Box,
            [0.0; 3],
            [2.0, 1.0, 2.0],
            Some([0.0, FRAC_PI_4, 0.0]),
        );
        let aabb = bounds_of(&item).unwrap();
        let half = std::f32::consts::SQRT_2;
        assert_aabb(aabb, Vec3::new(-half, -0.5, -half), Vec3::new(half, 0.5, half));
    }

    #[test]
    fn cylinder_matches_equivalent_box() {
        let cylinder = placed(ShapeKind::Cylinder, [0.0; 3], [2.0, 3.0, 2.0], None);
        let cuboid = placed(ShapeKind::Box, [0.0; 3], [2.0, 3.0, 2.0], None);
        assert_eq!(bounds_of(&cylinder), bounds_of(&cuboid));
    }

    #[test]
    fn bounds_follow_position_changes() {
        let mut item = placed(ShapeKind::Box, [0.0; 3], [1.0; 3], None);
        let before = bounds_of(&item).unwrap();
        item.position = Vec3::new(3.0, 0.0, 0.0);
        let after = bounds_of(&item).unwrap();
        assert!((after.min.x - before.min.x - 3.0).abs() < EPS);
    }

    #[test]
    fn degenerate_pieces_have_no_bounds() {
        assert!(bounds_of(&placed(ShapeKind::Box, [0.0; 3], [0.0; 3], None)).is_none());
        assert!(bounds_of(&placed(ShapeKind::Box, [0.0; 3], [1.0, -1.0, 1.0], None)).is_none());
        assert!(bounds_of(&placed(ShapeKind::Box, [f32::NAN, 0.0, 0.0], [1.0; 3], None)).is_none());
    }
}
