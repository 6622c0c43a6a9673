// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use wide::{f32x4, CmpGt};

use crate::types::aabb::Aabb;

/// Four axis-aligned boxes stored lane-wise (structure of arrays).
///
/// Layout: `min_x`, `min_y`, `neg_max_x`, `neg_max_y`, one lane per box. The
/// maximum corner is stored negated so both separation tests of an axis read
/// as "lane sum is positive":
///
/// - `a.min_x > b.max_x`  ⇔  `a.min_x + b.neg_max_x > 0`
/// - `b.min_x > a.max_x`  ⇔  `b.min_x + a.neg_max_x > 0`
///
/// Unused lanes hold the empty box (`+∞` min, `-∞` max), which is separated
/// from everything, so they never contribute a mask bit.
#[derive(Debug, Copy, Clone)]
pub struct PackedAabb {
    min_x: f32x4,
    min_y: f32x4,
    neg_max_x: f32x4,
    neg_max_y: f32x4,
}

impl Default for PackedAabb {
    fn default() -> Self {
        Self::empty()
    }
}

impl PackedAabb {
    /// Four empty lanes.
    pub fn empty() -> Self {
        let inf = f32x4::splat(f32::INFINITY);
        Self {
            min_x: inf,
            min_y: inf,
            neg_max_x: inf,
            neg_max_y: inf,
        }
    }

    /// Broadcasts one box into all four lanes.
    pub fn splat(aabb: &Aabb) -> Self {
        Self {
            min_x: f32x4::splat(aabb.min().x()),
            min_y: f32x4::splat(aabb.min().y()),
            neg_max_x: f32x4::splat(-aabb.max().x()),
            neg_max_y: f32x4::splat(-aabb.max().y()),
        }
    }

    /// Packs up to four boxes; `None` lanes are left empty.
    pub fn from_lanes(lanes: [Option<Aabb>; 4]) -> Self {
        let mut min_x = [f32::INFINITY; 4];
        let mut min_y = [f32::INFINITY; 4];
        let mut neg_max_x = [f32::INFINITY; 4];
        let mut neg_max_y = [f32::INFINITY; 4];
        for (k, lane) in lanes.iter().enumerate() {
            if let Some(b) = lane {
                min_x[k] = b.min().x();
                min_y[k] = b.min().y();
                neg_max_x[k] = -b.max().x();
                neg_max_y[k] = -b.max().y();
            }
        }
        Self {
            min_x: f32x4::from(min_x),
            min_y: f32x4::from(min_y),
            neg_max_x: f32x4::from(neg_max_x),
            neg_max_y: f32x4::from(neg_max_y),
        }
    }

    /// Unpacks lane `k`, or `None` if the lane is empty or out of range.
    pub fn lane(&self, k: usize) -> Option<Aabb> {
        if k >= 4 {
            return None;
        }
        let min_x = self.min_x.to_array()[k];
        let min_y = self.min_y.to_array()[k];
        let max_x = -self.neg_max_x.to_array()[k];
        let max_y = -self.neg_max_y.to_array()[k];
        if min_x > max_x || min_y > max_y {
            return None;
        }
        Some(Aabb::new(
            crate::math::Vec2::new(min_x, min_y),
            crate::math::Vec2::new(max_x, max_y),
        ))
    }

    /// Lane-wise overlap test. Bit `k` of the result is set iff box `k` of
    /// `a` overlaps box `k` of `b` (inclusive on touching edges).
    pub fn intersect(a: &Self, b: &Self) -> u8 {
        let zero = f32x4::splat(0.0);
        let separated = (a.min_x + b.neg_max_x).cmp_gt(zero)
            | (b.min_x + a.neg_max_x).cmp_gt(zero)
            | (a.min_y + b.neg_max_y).cmp_gt(zero)
            | (b.min_y + a.neg_max_y).cmp_gt(zero);
        (!separated.move_mask() & 0b1111) as u8
    }
}
