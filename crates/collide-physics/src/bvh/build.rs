// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Top-down binary builder: median split on the axis with the lower
//! surface-area cost.

use core::cmp::Ordering;

use collide_geom::Aabb;

use super::node::{ChildId, Leaf, Node2};

const AXIS_X: usize = 0;
const AXIS_Y: usize = 1;

/// Builds the binary tree over `leaves` into `nodes` and returns the root.
///
/// - Empty input yields `None` and no nodes.
/// - One leaf yields `Some(ChildId::Leaf(_))` and no nodes.
/// - `n ≥ 2` leaves yield exactly `n − 1` nodes with the root at index 0,
///   numbered in preorder.
///
/// `leaves` is reordered in place; `scratch` is resized to match.
pub(crate) fn build_binary(
    leaves: &mut [Leaf],
    scratch: &mut Vec<Leaf>,
    nodes: &mut Vec<Node2>,
) -> Option<ChildId> {
    nodes.clear();
    let first = *leaves.first()?;
    scratch.clear();
    scratch.resize(leaves.len(), first);
    Some(split(leaves, scratch, nodes))
}

fn split(leaves: &mut [Leaf], scratch: &mut [Leaf], nodes: &mut Vec<Node2>) -> ChildId {
    if let [only] = leaves {
        return ChildId::Leaf(only.index());
    }

    // Reserve this node's slot before any child so indices come out in preorder.
    let node_index = nodes.len();
    nodes.push(Node2::new(
        [*leaves[0].aabb(); 2],
        [ChildId::Leaf(leaves[0].index()); 2],
    ));

    scratch.copy_from_slice(leaves);
    leaves.sort_unstable_by(|a, b| by_center(a, b, AXIS_X));
    scratch.sort_unstable_by(|a, b| by_center(a, b, AXIS_Y));

    let mid = leaves.len() / 2;
    let (x_front, x_back) = (bounds(&leaves[..mid]), bounds(&leaves[mid..]));
    let (y_front, y_back) = (bounds(&scratch[..mid]), bounds(&scratch[mid..]));
    let cost_x = x_front.surface() + x_back.surface();
    let cost_y = y_front.surface() + y_back.surface();

    // Ties keep the X order.
    let aabbs = if cost_y < cost_x {
        leaves.copy_from_slice(scratch);
        [y_front, y_back]
    } else {
        [x_front, x_back]
    };

    let (front, back) = leaves.split_at_mut(mid);
    let (scratch_front, scratch_back) = scratch.split_at_mut(mid);
    let front_child = split(front, scratch_front, nodes);
    let back_child = split(back, scratch_back, nodes);

    nodes[node_index] = Node2::new(aabbs, [front_child, back_child]);
    ChildId::Node(node_index)
}

fn by_center(a: &Leaf, b: &Leaf, axis: usize) -> Ordering {
    a.center(axis)
        .total_cmp(&b.center(axis))
        .then_with(|| a.index().cmp(&b.index()))
}

/// Union of a non-empty run of leaves.
fn bounds(leaves: &[Leaf]) -> Aabb {
    leaves[1..]
        .iter()
        .fold(*leaves[0].aabb(), |acc, leaf| acc.union(leaf.aabb()))
}
