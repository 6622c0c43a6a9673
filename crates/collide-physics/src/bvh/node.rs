// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use collide_geom::{Aabb, PackedAabb};

/// Reference from a tree slot to either a polygon or another node.
///
/// Node indices are positions in the owning node buffer (`Vec<Node2>` or
/// `Vec<Node4>`); leaf indices are polygon indices.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ChildId {
    /// Polygon index.
    Leaf(usize),
    /// Internal node index.
    Node(usize),
}

impl ChildId {
    /// `true` for polygon references.
    pub const fn is_leaf(self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Raw index, polygon or node depending on the variant.
    pub const fn index(self) -> usize {
        match self {
            Self::Leaf(i) | Self::Node(i) => i,
        }
    }
}

/// World-space box of one polygon as seen by the builder.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Leaf {
    index: usize,
    aabb: Aabb,
    center: [f32; 2],
}

impl Leaf {
    /// Creates a leaf for polygon `index`.
    pub fn new(index: usize, aabb: Aabb) -> Self {
        Self {
            index,
            aabb,
            center: aabb.center().to_array(),
        }
    }

    /// Polygon index.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// World AABB.
    pub const fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    pub(crate) const fn center(&self, axis: usize) -> f32 {
        self.center[axis]
    }
}

/// Binary node produced by the SAH builder.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Node2 {
    aabbs: [Aabb; 2],
    children: [ChildId; 2],
}

impl Node2 {
    pub(crate) const fn new(aabbs: [Aabb; 2], children: [ChildId; 2]) -> Self {
        Self { aabbs, children }
    }

    /// Bounds of the front and back halves.
    pub const fn aabbs(&self) -> &[Aabb; 2] {
        &self.aabbs
    }

    /// Front and back children.
    pub const fn children(&self) -> [ChildId; 2] {
        self.children
    }
}

/// Four-way node traversed by the broad phase.
///
/// Slots `0..len` are filled; the rest are empty packed lanes that never
/// produce a mask bit.
#[derive(Debug, Copy, Clone)]
pub struct Node4 {
    packed: PackedAabb,
    children: [Option<ChildId>; 4],
}

impl Node4 {
    pub(crate) fn new(slots: [Option<(Aabb, ChildId)>; 4]) -> Self {
        Self {
            packed: PackedAabb::from_lanes(slots.map(|s| s.map(|(aabb, _)| aabb))),
            children: slots.map(|s| s.map(|(_, child)| child)),
        }
    }

    /// Child boxes in lane order.
    pub const fn packed(&self) -> &PackedAabb {
        &self.packed
    }

    /// Child in slot `k`, if filled.
    pub fn child(&self, k: usize) -> Option<ChildId> {
        self.children.get(k).copied().flatten()
    }

    /// Filled slots in order.
    pub fn children(&self) -> impl Iterator<Item = ChildId> + '_ {
        self.children.iter().flatten().copied()
    }

    /// Number of filled slots (1 to 4).
    pub fn len(&self) -> usize {
        self.children.iter().flatten().count()
    }

    /// Always `false` for nodes produced by the builder.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
