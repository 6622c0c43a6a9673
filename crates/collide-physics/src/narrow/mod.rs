// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Narrow phase: exact overlap of candidate pairs using each polygon's
//! oriented local box.

mod sat;

use collide_geom::{Obb, Vec2};

use crate::broad::PolygonPair;

pub use sat::{overlaps_scalar, overlaps_wide};

/// Which SAT kernel evaluates candidate pairs. Both give identical answers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SatKernel {
    /// One axis at a time with early exit.
    Scalar,
    /// Four axes per vector compare.
    #[default]
    Wide,
}

impl SatKernel {
    /// Runs the selected kernel on one pair of boxes.
    pub fn overlaps(self, a: &Obb, b: &Obb) -> bool {
        match self {
            Self::Scalar => overlaps_scalar(a, b),
            Self::Wide => overlaps_wide(a, b),
        }
    }
}

/// Contact geometry for a colliding pair.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Contact {
    /// World-space contact point.
    pub point: Vec2,
    /// Unit normal pointing from `a` towards `b`.
    pub normal: Vec2,
    /// Penetration depth along `normal`.
    pub depth: f32,
}

/// A candidate pair confirmed by the narrow phase.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Collision {
    /// Lower polygon index.
    pub a: usize,
    /// Higher polygon index.
    pub b: usize,
    /// Always `None` from the boolean kernels.
    pub contact: Option<Contact>,
}

impl Collision {
    /// The pair this collision was confirmed for.
    pub const fn pair(&self) -> PolygonPair {
        PolygonPair {
            a: self.a,
            b: self.b,
        }
    }
}

/// Tests every candidate against `obbs` and appends the overlapping ones.
///
/// Callers guarantee that every index in `pairs` is in range for `obbs`.
pub fn collect_collisions(
    kernel: SatKernel,
    pairs: &[PolygonPair],
    obbs: &[Obb],
    out: &mut Vec<Collision>,
) {
    out.extend(pairs.iter().filter_map(|pair| {
        kernel.overlaps(&obbs[pair.a], &obbs[pair.b]).then_some(Collision {
            a: pair.a,
            b: pair.b,
            contact: None,
        })
    }));
}
