// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Binary-to-4-ary compaction.
//!
//! Each 4-ary node starts from one binary node's two children and keeps
//! opening the internal slot with the largest area until four slots are
//! filled or only leaves remain. Covered volumes are unchanged; only the
//! depth shrinks.

use collide_geom::Aabb;

use super::node::{ChildId, Node2, Node4};

#[derive(Copy, Clone)]
struct Slot {
    aabb: Aabb,
    child: ChildId,
    surface: f32,
}

impl Slot {
    fn new(aabb: Aabb, child: ChildId) -> Self {
        Self {
            aabb,
            child,
            surface: aabb.surface(),
        }
    }
}

/// Rebuilds `out` from the binary tree rooted at `root`.
///
/// A lone leaf root becomes a single one-slot node so every polygon stays
/// reachable; an empty tree yields no nodes.
pub(crate) fn compact(
    binary: &[Node2],
    root: Option<ChildId>,
    leaf_box: Option<Aabb>,
    out: &mut Vec<Node4>,
) {
    out.clear();
    match (root, leaf_box) {
        (Some(ChildId::Node(index)), _) => {
            expand(binary, index, out);
        }
        (Some(leaf @ ChildId::Leaf(_)), Some(aabb)) => {
            out.push(Node4::new([Some((aabb, leaf)), None, None, None]));
        }
        _ => {}
    }
}

fn expand(binary: &[Node2], node: usize, out: &mut Vec<Node4>) -> usize {
    let index = out.len();
    out.push(Node4::new([None; 4]));

    let seed = &binary[node];
    let mut slots: [Option<Slot>; 4] = [None; 4];
    slots[0] = Some(Slot::new(seed.aabbs()[0], seed.children()[0]));
    slots[1] = Some(Slot::new(seed.aabbs()[1], seed.children()[1]));
    let mut len = 2;

    while len < 4 {
        let Some((k, inner)) = largest_internal(&slots[..len]) else {
            break;
        };
        let opened = &binary[inner];
        slots[k] = Some(Slot::new(opened.aabbs()[0], opened.children()[0]));
        slots[len] = Some(Slot::new(opened.aabbs()[1], opened.children()[1]));
        len += 1;
    }

    let mut lanes = [None; 4];
    for (lane, slot) in lanes.iter_mut().zip(slots.iter().flatten()) {
        let child = match slot.child {
            ChildId::Node(inner) => ChildId::Node(expand(binary, inner, out)),
            leaf @ ChildId::Leaf(_) => leaf,
        };
        *lane = Some((slot.aabb, child));
    }
    out[index] = Node4::new(lanes);
    index
}

/// Slot position and binary node index of the widest internal slot; the
/// first one wins on equal areas.
fn largest_internal(slots: &[Option<Slot>]) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize, f32)> = None;
    for (k, slot) in slots.iter().enumerate() {
        let Some(Slot { child: ChildId::Node(inner), surface, .. }) = *slot else {
            continue;
        };
        if best.is_none_or(|(_, _, s)| surface > s) {
            best = Some((k, inner, surface));
        }
    }
    best.map(|(k, inner, _)| (k, inner))
}
