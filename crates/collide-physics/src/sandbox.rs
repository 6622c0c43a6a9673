// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use tracing::debug;

use crate::config::EngineConfig;
use crate::engine::PhysicsEngine;
use crate::error::PhysicsError;
use crate::world::{Polygon, World};

/// Owns the polygon store and the engine and keeps their indices in lockstep.
///
/// Polygon `i` in [`World`] always matches local box `i` in
/// [`PhysicsEngine`]; adding appends to both and removing swap-removes from
/// both.
#[derive(Debug, Default)]
pub struct Sandbox {
    world: World,
    engine: PhysicsEngine,
}

impl Sandbox {
    /// Creates an empty sandbox.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            world: World::new(),
            engine: PhysicsEngine::new(config),
        }
    }

    /// Adds `polygon` and returns its index.
    ///
    /// # Errors
    /// Propagates [`PhysicsError::DegenerateShape`] from the engine; nothing
    /// is added in that case.
    pub fn add(&mut self, polygon: Polygon) -> Result<usize, PhysicsError> {
        let index = self.engine.add_local_aabb(polygon.local_aabb())?;
        let placed = self.world.push(polygon);
        debug_assert_eq!(index, placed, "world and engine out of lockstep");
        Ok(index)
    }

    /// Removes polygon `index`; the last polygon takes its index.
    ///
    /// # Errors
    /// Returns [`PhysicsError::UnknownShape`] when `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Result<Polygon, PhysicsError> {
        let polygon = self
            .world
            .swap_remove(index)
            .ok_or(PhysicsError::UnknownShape(index))?;
        self.engine.remove_shape(index)?;
        Ok(polygon)
    }

    /// Removes every polygon and resets the engine.
    pub fn clear(&mut self) {
        self.world.clear();
        self.engine.reset();
        debug!("sandbox cleared");
    }

    /// Runs one engine step over the current placements.
    ///
    /// # Errors
    /// Propagates [`PhysicsEngine::step`] errors.
    pub fn step(&mut self, dt: f32) -> Result<(), PhysicsError> {
        self.engine.step(&self.world, dt)
    }

    /// Polygon store.
    pub const fn world(&self) -> &World {
        &self.world
    }

    /// Mutable polygon store; placements and velocities only, membership
    /// changes go through [`add`](Self::add) and [`remove`](Self::remove).
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// The engine.
    pub const fn engine(&self) -> &PhysicsEngine {
        &self.engine
    }

    /// Mutable engine, for activation and configuration.
    pub fn engine_mut(&mut self) -> &mut PhysicsEngine {
        &mut self.engine
    }

    /// Both halves at once, so collision results can drive polygon updates.
    pub fn split_mut(&mut self) -> (&mut World, &PhysicsEngine) {
        (&mut self.world, &self.engine)
    }
}
