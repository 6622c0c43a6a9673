// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
//! Rotation-aware AABB transform: containment and tightness.

use collide_geom::{Aabb, Mat2, Vec2};
use core::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};
use proptest::prelude::*;

/// Bounds of the four corners mapped one by one.
fn corner_bounds(local: &Aabb, position: Vec2, rotation: &Mat2) -> (Vec2, Vec2) {
    let corners = local.corners().map(|c| position + rotation.transform(c));
    let mut lo = corners[0];
    let mut hi = corners[0];
    for c in &corners[1..] {
        lo = lo.min(c);
        hi = hi.max(c);
    }
    (lo, hi)
}

#[test]
fn quarter_turn_swaps_extents() {
    let local = Aabb::new(Vec2::new(-2.0, -1.0), Vec2::new(2.0, 1.0));
    let world = local.transformed(Vec2::new(5.0, 5.0), &Mat2::from_angle(FRAC_PI_2));
    let min = world.min().to_array();
    let max = world.max().to_array();
    assert!((min[0] - 4.0).abs() < 1e-6 && (max[0] - 6.0).abs() < 1e-6, "{world:?}");
    assert!((min[1] - 3.0).abs() < 1e-6 && (max[1] - 7.0).abs() < 1e-6, "{world:?}");
}

#[test]
fn eighth_turn_grows_square_to_diagonal() {
    let local = Aabb::from_center_half_extents(Vec2::ZERO, 1.0, 1.0);
    let world = local.transformed(Vec2::ZERO, &Mat2::from_angle(FRAC_PI_4));
    let h = 2.0_f32.sqrt();
    assert!((world.max().x() - h).abs() < 1e-5);
    assert!((world.min().y() + h).abs() < 1e-5);
}

#[test]
fn off_center_local_box_rotates_about_origin() {
    // Rod from x=0..2: a half turn puts it on x=-2..0.
    let local = Aabb::new(Vec2::new(0.0, -0.1), Vec2::new(2.0, 0.1));
    let world = local.transformed(Vec2::ZERO, &Mat2::from_angle(PI));
    assert!((world.min().x() + 2.0).abs() < 1e-5);
    assert!(world.max().x().abs() < 1e-5);
}

proptest! {
    #[test]
    fn transformed_equals_corner_bounds(
        cx in -50.0f32..50.0, cy in -50.0f32..50.0,
        hx in 0.0f32..20.0, hy in 0.0f32..20.0,
        px in -100.0f32..100.0, py in -100.0f32..100.0,
        angle in -PI..PI,
    ) {
        let local = Aabb::from_center_half_extents(Vec2::new(cx, cy), hx, hy);
        let rotation = Mat2::from_angle(angle);
        let position = Vec2::new(px, py);
        let world = local.transformed(position, &rotation);
        let (lo, hi) = corner_bounds(&local, position, &rotation);
        // Contains every corner and is the tightest such box.
        prop_assert_eq!(world.min().to_array(), lo.to_array());
        prop_assert_eq!(world.max().to_array(), hi.to_array());
    }
}
