// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Separating-axis test between two oriented boxes.
//!
//! Candidate axes are the four world-space box axes `[A.x, A.y, B.x, B.y]`.
//! Along axis `u`, with `d = B.center − A.center`, the boxes are separated
//! when `|d·u| > rA + rB`, where a box's projected radius is
//! `ex·(|X·u| + ε) + ey·(|Y·u| + ε)`. The `ε` padding keeps near-parallel
//! axes from rejecting touching boxes on rounding noise.
//!
//! Both kernels perform the same float operations in the same order, so they
//! agree bit for bit, and swapping `a` and `b` only negates `d`.

use collide_geom::math::EPSILON;
use collide_geom::{Obb, Vec2};
use wide::{f32x4, CmpGt};

fn radius(obb: &Obb, u: Vec2) -> f32 {
    let frame = obb.rotation();
    let e = obb.half_extents();
    e.x() * (frame.x_axis().dot(&u).abs() + EPSILON)
        + e.y() * (frame.y_axis().dot(&u).abs() + EPSILON)
}

/// Scalar kernel: tests the four axes one after another and stops at the
/// first separating one.
pub fn overlaps_scalar(a: &Obb, b: &Obb) -> bool {
    let d = b.center() - a.center();
    let (ra, rb) = (a.rotation(), b.rotation());
    let axes = [ra.x_axis(), ra.y_axis(), rb.x_axis(), rb.y_axis()];
    !axes
        .into_iter()
        .any(|u| d.dot(&u).abs() > radius(a, u) + radius(b, u))
}

/// 4-wide kernel: one axis per lane, all four tested with one compare.
pub fn overlaps_wide(a: &Obb, b: &Obb) -> bool {
    let d = b.center() - a.center();
    let (ra, rb) = (a.rotation(), b.rotation());
    let axes = [ra.x_axis(), ra.y_axis(), rb.x_axis(), rb.y_axis()];
    let ux = f32x4::from(axes.map(Vec2::x));
    let uy = f32x4::from(axes.map(Vec2::y));

    let proj = (f32x4::splat(d.x()) * ux + f32x4::splat(d.y()) * uy).abs();
    let separated = proj.cmp_gt(lane_radius(a, ux, uy) + lane_radius(b, ux, uy));
    separated.move_mask() == 0
}

fn lane_radius(obb: &Obb, ux: f32x4, uy: f32x4) -> f32x4 {
    let frame = obb.rotation();
    let (x, y) = (frame.x_axis(), frame.y_axis());
    let e = obb.half_extents();
    let eps = f32x4::splat(EPSILON);
    let along_x = (f32x4::splat(x.x()) * ux + f32x4::splat(x.y()) * uy).abs() + eps;
    let along_y = (f32x4::splat(y.x()) * ux + f32x4::splat(y.y()) * uy).abs() + eps;
    f32x4::splat(e.x()) * along_x + f32x4::splat(e.y()) * along_y
}

#[cfg(test)]
mod tests {
    use super::*;
    use collide_geom::Mat2;

    fn square(x: f32, y: f32, half: f32, angle: f32) -> Obb {
        Obb::new(Vec2::new(x, y), Mat2::from_angle(angle), Vec2::splat(half))
    }

    #[test]
    fn both_kernels_on_axis_aligned_boxes() {
        let a = square(0.0, 0.0, 0.5, 0.0);
        for (x, expected) in [(0.5, true), (1.0, true), (1.01, false), (3.0, false)] {
            let b = square(x, 0.0, 0.5, 0.0);
            assert_eq!(overlaps_scalar(&a, &b), expected, "x={x}");
            assert_eq!(overlaps_wide(&a, &b), expected, "x={x}");
        }
    }

    #[test]
    fn rotated_box_uses_its_own_axes() {
        // The diagonal gap between the two boxes is only visible along the
        // rotated box's axes; the world axes alone would report overlap.
        let a = square(0.0, 0.0, 1.0, core::f32::consts::FRAC_PI_4);
        let b = square(1.3, 1.3, 0.5, 0.0);
        assert!(!overlaps_scalar(&a, &b));
        assert!(!overlaps_wide(&a, &b));
    }
}
