// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::{Mat2, Vec2};

/// Infinite line through `point` along unit direction `dir`.
///
/// The normal is the counter-clockwise perpendicular of `dir`; positive
/// signed distances lie on the normal side.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Line {
    point: Vec2,
    dir: Vec2,
}

impl Line {
    /// Creates a line; `dir` is normalised.
    pub fn new(point: Vec2, dir: Vec2) -> Self {
        Self {
            point,
            dir: dir.normalize(),
        }
    }

    /// Line through `from` heading towards `to`.
    pub fn through(from: Vec2, to: Vec2) -> Self {
        Self::new(from, to - from)
    }

    /// Anchor point.
    pub const fn point(&self) -> Vec2 {
        self.point
    }

    /// Unit direction.
    pub const fn dir(&self) -> Vec2 {
        self.dir
    }

    /// Unit normal.
    pub fn normal(&self) -> Vec2 {
        self.dir.perp()
    }

    /// Signed distance from `pt` to the line.
    pub fn signed_distance(&self, pt: Vec2) -> f32 {
        (pt - self.point).dot(&self.normal())
    }

    /// Moves the line into the parent frame given by `rotation` and `position`.
    pub fn transform(&self, rotation: &Mat2, position: Vec2) -> Self {
        Self {
            point: position + rotation.transform(self.point),
            dir: rotation.transform(self.dir),
        }
    }

    /// Orthogonal projection of `pt` onto the line.
    pub fn project(&self, pt: Vec2) -> Vec2 {
        self.point + self.dir * (pt - self.point).dot(&self.dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_distance_uses_left_normal() {
        let l = Line::through(Vec2::ZERO, Vec2::new(2.0, 0.0));
        assert_eq!(l.signed_distance(Vec2::new(5.0, 3.0)), 3.0);
        assert_eq!(l.signed_distance(Vec2::new(-1.0, -2.0)), -2.0);
        assert_eq!(l.project(Vec2::new(5.0, 3.0)).to_array(), [5.0, 0.0]);
    }

    #[test]
    fn transform_moves_anchor_and_turns_direction() {
        let l = Line::new(Vec2::UNIT_X, Vec2::UNIT_X);
        let moved = l.transform(
            &Mat2::from_angle(core::f32::consts::FRAC_PI_2),
            Vec2::new(1.0, 1.0),
        );
        assert!((moved.point().x() - 1.0).abs() < 1e-6);
        assert!((moved.point().y() - 2.0).abs() < 1e-6);
        assert!((moved.dir().y() - 1.0).abs() < 1e-6);
    }
}
