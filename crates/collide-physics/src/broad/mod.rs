// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Broad-phase strategies producing candidate pairs for the narrow phase.
//!
//! Pair contract (applies to every strategy):
//! - Pair identity is canonicalized as `(a, b)` with `a < b`.
//! - Each unordered pair is emitted at most once; `(i, i)` never is.
//! - Candidates may over-approximate the true AABB overlaps, never miss one.
//! - Pairs are listed in ascending `(a, b)` order so responses applied in
//!   list order do not depend on the strategy.

mod brute;
mod tree;

use collide_geom::Aabb;

use crate::bvh::Bvh;

pub use brute::collect_all_pairs;
pub use tree::collect_tree_pairs;

/// Two polygon indices proposed for an exact overlap test.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PolygonPair {
    /// Lower polygon index.
    pub a: usize,
    /// Higher polygon index.
    pub b: usize,
}

impl PolygonPair {
    /// Canonical pair for two distinct indices, in either order.
    pub fn new(i: usize, j: usize) -> Self {
        debug_assert_ne!(i, j, "self pair");
        Self {
            a: i.min(j),
            b: i.max(j),
        }
    }
}

/// Closed set of broad-phase strategies, chosen at configuration time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BroadPhase {
    /// Every `i < j` pair; `O(n²)` reference strategy.
    BruteForce,
    /// 4-ary BVH traversal with packed overlap masks.
    #[default]
    Tree,
}

impl BroadPhase {
    /// Appends this frame's candidate pairs to `out`.
    ///
    /// `bvh` must have been rebuilt from `world_aabbs`; the brute-force
    /// strategy ignores it.
    pub fn collect_pairs(self, bvh: &Bvh, world_aabbs: &[Aabb], out: &mut Vec<PolygonPair>) {
        match self {
            Self::BruteForce => collect_all_pairs(world_aabbs.len(), out),
            Self::Tree => collect_tree_pairs(bvh, world_aabbs, out),
        }
    }
}
