// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Collision detection core for Collide.

Each frame the engine:
1. transforms every polygon's local box into a world AABB and an oriented box,
2. rebuilds a binary BVH with an SAH median split and compacts it to a 4-ary
   tree with packed child boxes,
3. collects candidate pairs with 4-wide overlap masks (or brute force),
4. confirms candidates with a separating-axis test on the oriented boxes.

Polygons are addressed by dense indices shared between [`World`] and
[`PhysicsEngine`]; [`Sandbox`] keeps the two in lockstep. The engine reads
placements through [`TransformProvider`] and never holds references into the
world.
"]

pub mod broad;
pub mod bvh;
mod config;
mod engine;
mod error;
pub mod narrow;
mod provider;
mod sandbox;
pub mod shapes;
mod stats;
pub mod world;

pub use broad::{BroadPhase, PolygonPair};
pub use bvh::Bvh;
pub use config::EngineConfig;
pub use engine::PhysicsEngine;
pub use error::PhysicsError;
pub use narrow::{Collision, Contact, SatKernel};
pub use provider::TransformProvider;
pub use sandbox::Sandbox;
pub use stats::StepStats;
pub use world::{Polygon, World};
