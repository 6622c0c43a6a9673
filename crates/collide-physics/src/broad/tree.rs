// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use collide_geom::{Aabb, PackedAabb};

use super::PolygonPair;
use crate::bvh::{Bvh, ChildId, Node4};

/// Queries every polygon's box against the 4-ary tree.
///
/// A hit on leaf `j` from polygon `i` is kept only when `j > i`: `j == i` is
/// the polygon itself and `j < i` was already reported while querying `j`.
/// Pairs come out in ascending `(a, b)` order, the same order as brute force.
pub fn collect_tree_pairs(bvh: &Bvh, world_aabbs: &[Aabb], out: &mut Vec<PolygonPair>) {
    let nodes = bvh.nodes();
    if nodes.is_empty() {
        return;
    }
    for (i, aabb) in world_aabbs.iter().enumerate() {
        let start = out.len();
        let probe = PackedAabb::splat(aabb);
        descend(nodes, 0, i, &probe, out);
        out[start..].sort_unstable_by_key(|p| p.b);
    }
}

fn descend(
    nodes: &[Node4],
    node: usize,
    poly: usize,
    probe: &PackedAabb,
    out: &mut Vec<PolygonPair>,
) {
    let current = &nodes[node];
    let mut mask = PackedAabb::intersect(probe, current.packed());
    while mask != 0 {
        let slot = mask.trailing_zeros() as usize;
        mask &= mask - 1;
        match current.child(slot) {
            Some(ChildId::Leaf(other)) if other > poly => {
                out.push(PolygonPair { a: poly, b: other });
            }
            Some(ChildId::Node(inner)) => descend(nodes, inner, poly, probe, out),
            _ => {}
        }
    }
}
