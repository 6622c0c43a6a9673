// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Bounding volume hierarchy rebuilt from scratch every frame.
//!
//! Pipeline:
//! 1. [`build`]: SAH-chosen median split into a binary tree (`Node2`).
//! 2. [`compact`]: greedy flattening into a 4-ary tree (`Node4`) whose child
//!    boxes sit in packed lanes for the vectorized overlap test.
//!
//! Buffers are owned by [`Bvh`] and reused across frames; nothing survives a
//! rebuild except capacity.

mod build;
mod compact;
mod node;

use collide_geom::Aabb;

pub use node::{ChildId, Leaf, Node2, Node4};

/// Per-frame tree over world AABBs. Root is node 0 of both buffers.
#[derive(Debug, Default)]
pub struct Bvh {
    leaves: Vec<Leaf>,
    scratch: Vec<Leaf>,
    binary: Vec<Node2>,
    binary_root: Option<ChildId>,
    nodes: Vec<Node4>,
}

impl Bvh {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards the previous tree and builds one over `world_aabbs`, where
    /// `world_aabbs[i]` belongs to polygon `i`.
    pub fn rebuild(&mut self, world_aabbs: &[Aabb]) {
        self.leaves.clear();
        self.leaves.extend(
            world_aabbs
                .iter()
                .enumerate()
                .map(|(i, aabb)| Leaf::new(i, *aabb)),
        );
        self.binary_root =
            build::build_binary(&mut self.leaves, &mut self.scratch, &mut self.binary);
        compact::compact(
            &self.binary,
            self.binary_root,
            world_aabbs.first().copied(),
            &mut self.nodes,
        );
    }

    /// Binary nodes of the last build (`n − 1` for `n ≥ 2` polygons).
    pub fn binary_nodes(&self) -> &[Node2] {
        &self.binary
    }

    /// Root of the binary tree: `None` when empty, a leaf for one polygon.
    pub const fn binary_root(&self) -> Option<ChildId> {
        self.binary_root
    }

    /// 4-ary nodes traversed by the broad phase.
    pub fn nodes(&self) -> &[Node4] {
        &self.nodes
    }

    /// `true` when the last build covered no polygons.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of 4-ary levels on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        if self.nodes.is_empty() {
            return 0;
        }
        self.depth_from(0)
    }

    fn depth_from(&self, node: usize) -> usize {
        1 + self.nodes[node]
            .children()
            .filter_map(|c| match c {
                ChildId::Node(inner) => Some(self.depth_from(inner)),
                ChildId::Leaf(_) => None,
            })
            .max()
            .unwrap_or(0)
    }

    /// Every leaf reachable from the root, visiting all slots without any
    /// overlap test.
    pub fn leaf_indices(&self) -> Vec<usize> {
        let mut out = Vec::new();
        if self.nodes.is_empty() {
            return out;
        }
        let mut stack = vec![0usize];
        while let Some(node) = stack.pop() {
            for child in self.nodes[node].children() {
                match child {
                    ChildId::Leaf(i) => out.push(i),
                    ChildId::Node(inner) => stack.push(inner),
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use collide_geom::Vec2;

    fn row(n: usize, spacing: f32) -> Vec<Aabb> {
        (0..n)
            .map(|i| Aabb::from_center_half_extents(Vec2::new(i as f32 * spacing, 0.0), 0.5, 0.5))
            .collect()
    }

    #[test]
    fn single_polygon_gets_one_slot_root() {
        let mut bvh = Bvh::new();
        bvh.rebuild(&row(1, 1.0));
        assert!(bvh.binary_nodes().is_empty());
        assert_eq!(bvh.binary_root(), Some(ChildId::Leaf(0)));
        assert_eq!(bvh.nodes().len(), 1);
        assert_eq!(bvh.nodes()[0].len(), 1);
        assert_eq!(bvh.leaf_indices(), vec![0]);
        assert_eq!(bvh.depth(), 1);
    }

    #[test]
    fn rebuild_replaces_previous_tree() {
        let mut bvh = Bvh::new();
        bvh.rebuild(&row(9, 2.0));
        assert_eq!(bvh.binary_nodes().len(), 8);
        bvh.rebuild(&[]);
        assert!(bvh.is_empty());
        assert_eq!(bvh.binary_root(), None);
        assert_eq!(bvh.depth(), 0);
        assert!(bvh.leaf_indices().is_empty());
    }

    #[test]
    fn four_or_fewer_polygons_fit_in_the_root() {
        for n in 2..=4 {
            let mut bvh = Bvh::new();
            bvh.rebuild(&row(n, 3.0));
            assert_eq!(bvh.nodes().len(), 1, "n={n}");
            assert_eq!(bvh.nodes()[0].len(), n, "n={n}");
        }
    }
}
