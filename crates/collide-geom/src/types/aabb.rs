// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::{Mat2, Vec2};

/// Axis-aligned bounding box.
///
/// Invariants:
/// - `min` components are less than or equal to `max` components.
/// - Values are `f32` world (or shape-local) units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    min: Vec2,
    max: Vec2,
}

impl Aabb {
    /// Constructs an AABB from its minimum and maximum corners.
    ///
    /// # Panics
    /// Panics if any component of `min` is greater than its counterpart in `max`.
    #[must_use]
    pub fn new(min: Vec2, max: Vec2) -> Self {
        assert!(
            min.x() <= max.x() && min.y() <= max.y(),
            "invalid AABB: min {min:?} > max {max:?}"
        );
        Self { min, max }
    }

    /// Returns the minimum corner.
    #[must_use]
    pub const fn min(&self) -> Vec2 {
        self.min
    }

    /// Returns the maximum corner.
    #[must_use]
    pub const fn max(&self) -> Vec2 {
        self.max
    }

    /// Builds an AABB centered at `center` with half-extents `hx, hy`.
    ///
    /// Negative half-extents are folded to their absolute value.
    #[must_use]
    pub fn from_center_half_extents(center: Vec2, hx: f32, hy: f32) -> Self {
        let he = Vec2::new(hx.abs(), hy.abs());
        Self::new(center - he, center + he)
    }

    /// Builds the minimal AABB that contains all `points`, or `None` when
    /// `points` is empty.
    #[must_use]
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Some(Self { min, max })
    }

    /// Box center.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Half of the box size along each axis.
    #[must_use]
    pub fn half_extents(&self) -> Vec2 {
        (self.max - self.min) * 0.5
    }

    /// Area of the box; the cost term of the surface-area heuristic.
    #[must_use]
    pub fn surface(&self) -> f32 {
        (self.max.x() - self.min.x()) * (self.max.y() - self.min.y())
    }

    /// Returns `true` if this AABB overlaps another (inclusive on edges).
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        // Inclusive so touching edges still pair up in the broad phase.
        !(self.max.x() < other.min.x()
            || self.min.x() > other.max.x()
            || self.max.y() < other.min.y()
            || self.min.y() > other.max.y())
    }

    /// Returns `true` if `p` lies inside or on the boundary.
    #[must_use]
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x() >= self.min.x()
            && p.x() <= self.max.x()
            && p.y() >= self.min.y()
            && p.y() <= self.max.y()
    }

    /// Returns the union of two AABBs.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(&other.min),
            max: self.max.max(&other.max),
        }
    }

    /// Smallest box enclosing every box in `boxes`; `None` for an empty set.
    #[must_use]
    pub fn surrounding<'a, I>(boxes: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let mut iter = boxes.into_iter();
        let first = *iter.next()?;
        Some(iter.fold(first, |acc, b| acc.union(b)))
    }

    /// Tightest AABB around this box after rotating by `rotation` and then
    /// translating by `position`.
    ///
    /// Each output axis is the sum of the extreme products of one matrix row
    /// with the box bounds, so the result equals the min/max over the four
    /// transformed corners for any angle.
    #[must_use]
    pub fn transformed(&self, position: Vec2, rotation: &Mat2) -> Self {
        let (cx, cy) = (rotation.x_axis(), rotation.y_axis());

        let span = |m: f32, lo: f32, hi: f32| {
            let a = m * lo;
            let b = m * hi;
            if a <= b {
                (a, b)
            } else {
                (b, a)
            }
        };

        // Row x: cx.x * v.x + cy.x * v.y
        let (xx_lo, xx_hi) = span(cx.x(), self.min.x(), self.max.x());
        let (xy_lo, xy_hi) = span(cy.x(), self.min.y(), self.max.y());
        // Row y: cx.y * v.x + cy.y * v.y
        let (yx_lo, yx_hi) = span(cx.y(), self.min.x(), self.max.x());
        let (yy_lo, yy_hi) = span(cy.y(), self.min.y(), self.max.y());

        Self {
            min: Vec2::new(xx_lo + xy_lo, yx_lo + yy_lo) + position,
            max: Vec2::new(xx_hi + xy_hi, yx_hi + yy_hi) + position,
        }
    }

    /// The four corners, counter-clockwise from `min`.
    #[must_use]
    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.min,
            Vec2::new(self.max.x(), self.min.y()),
            self.max,
            Vec2::new(self.min.x(), self.max.y()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "invalid AABB")]
    fn inverted_corners_are_rejected() {
        let _ = Aabb::new(Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn surface_is_width_times_height() {
        let b = Aabb::new(Vec2::new(-1.0, 2.0), Vec2::new(3.0, 2.5));
        assert_eq!(b.surface(), 2.0);
        assert_eq!(b.center().to_array(), [1.0, 2.25]);
        assert_eq!(b.half_extents().to_array(), [2.0, 0.25]);
    }

    #[test]
    fn surrounding_of_empty_set_is_none() {
        assert!(Aabb::surrounding(&[]).is_none());
        assert!(Aabb::from_points(&[]).is_none());
    }

    #[test]
    fn touching_edges_overlap() {
        let a = Aabb::new(Vec2::ZERO, Vec2::new(1.0, 1.0));
        let b = Aabb::new(Vec2::new(1.0, 0.0), Vec2::new(2.0, 1.0));
        let c = Aabb::new(Vec2::new(1.5, 0.0), Vec2::new(2.0, 1.0));
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn identity_transform_only_translates() {
        let b = Aabb::new(Vec2::new(-1.0, -2.0), Vec2::new(1.0, 2.0));
        let t = b.transformed(Vec2::new(10.0, 0.0), &Mat2::IDENTITY);
        assert_eq!(t.min().to_array(), [9.0, -2.0]);
        assert_eq!(t.max().to_array(), [11.0, 2.0]);
    }
}
