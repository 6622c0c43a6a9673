// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::{Mat2, Vec2};
use crate::types::{aabb::Aabb, transform::Transform};

/// Oriented box: center, orthonormal frame, and non-negative half-extents.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Obb {
    center: Vec2,
    rotation: Mat2,
    half_extents: Vec2,
}

impl Obb {
    /// Creates an oriented box. Half-extents are folded to absolute values.
    #[must_use]
    pub fn new(center: Vec2, rotation: Mat2, half_extents: Vec2) -> Self {
        Self {
            center,
            rotation,
            half_extents: half_extents.abs(),
        }
    }

    /// Oriented box covering a shape-local `aabb` placed by `transform`.
    ///
    /// An off-center local box moves its center with the rotation.
    #[must_use]
    pub fn from_local_aabb(aabb: &Aabb, transform: &Transform) -> Self {
        Self::new(
            transform.transform_point(aabb.center()),
            transform.rotation(),
            aabb.half_extents(),
        )
    }

    /// World-space center.
    #[must_use]
    pub const fn center(&self) -> Vec2 {
        self.center
    }

    /// Orientation frame.
    #[must_use]
    pub const fn rotation(&self) -> Mat2 {
        self.rotation
    }

    /// Half-extents along the frame's local axes.
    #[must_use]
    pub const fn half_extents(&self) -> Vec2 {
        self.half_extents
    }

    /// World-space corners, counter-clockwise.
    #[must_use]
    pub fn corners(&self) -> [Vec2; 4] {
        let ex = self.rotation.x_axis() * self.half_extents.x();
        let ey = self.rotation.y_axis() * self.half_extents.y();
        [
            self.center - ex - ey,
            self.center + ex - ey,
            self.center + ex + ey,
            self.center - ex + ey,
        ]
    }
}
