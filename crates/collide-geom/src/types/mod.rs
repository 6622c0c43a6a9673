// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core geometry types used by the collision pipeline.
//!
//! Determinism notes:
//! - Overlap semantics are inclusive on edges to avoid pair churn on contact
//!   boundaries.
//! - Box math uses plain `f32` multiply/add without fused operations so the
//!   scalar and packed paths round identically.

#[doc = "Axis-aligned bounding boxes (local and world space)."]
pub mod aabb;
#[doc = "Oriented bounding boxes for the narrow phase."]
pub mod obb;
#[doc = "Four-lane AABB packing for vectorized overlap tests."]
pub mod packed;
#[doc = "Rigid 2D transforms."]
pub mod transform;
