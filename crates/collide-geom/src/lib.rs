// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Geometry primitives for Collide.

This crate provides:
- 2D vectors, rotation frames, lines, and a deterministic PRNG (`math`).
- Axis-aligned bounding boxes (`Aabb`) with rotation-aware transforms.
- Four-lane packed boxes (`PackedAabb`) tested against each other with one
  vector comparison per axis side.
- Oriented boxes (`Obb`) and rigid transforms (`Transform`).

Design notes:
- Deterministic: no ambient RNG; identical inputs give identical bits.
- Float32 throughout; operations favor clarity and reproducibility.
"]

pub mod math;
pub mod types;

pub use math::{Line, Mat2, Prng, Vec2};
pub use types::aabb::Aabb;
pub use types::obb::Obb;
pub use types::packed::PackedAabb;
pub use types::transform::Transform;
