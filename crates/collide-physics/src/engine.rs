// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Physics step driver.

use std::time::Instant;

use collide_geom::{Aabb, Obb, Vec2};
use tracing::{debug, error, instrument, trace};

use crate::broad::PolygonPair;
use crate::bvh::Bvh;
use crate::config::EngineConfig;
use crate::error::PhysicsError;
use crate::narrow::{collect_collisions, Collision};
use crate::provider::TransformProvider;
use crate::stats::StepStats;
use crate::world::local_bounds;

/// Collision detection pipeline over dense polygon indices.
///
/// Holds one local box per polygon. Each active [`step`](Self::step) rebuilds
/// world boxes and the tree from the provider's transforms, then replaces the
/// collision list. All buffers keep their capacity between frames.
#[derive(Debug)]
pub struct PhysicsEngine {
    config: EngineConfig,
    active: bool,
    local_aabbs: Vec<Aabb>,
    world_aabbs: Vec<Aabb>,
    world_obbs: Vec<Obb>,
    bvh: Bvh,
    candidates: Vec<PolygonPair>,
    collisions: Vec<Collision>,
    stats: StepStats,
}

impl Default for PhysicsEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl PhysicsEngine {
    /// Creates an engine with no shapes.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            active: config.start_active,
            local_aabbs: Vec::new(),
            world_aabbs: Vec::new(),
            world_obbs: Vec::new(),
            bvh: Bvh::new(),
            candidates: Vec::new(),
            collisions: Vec::new(),
            stats: StepStats::default(),
        }
    }

    /// Settings the engine was built with.
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Drops every shape and result and re-activates the engine.
    pub fn reset(&mut self) {
        self.local_aabbs.clear();
        self.clear_frame();
        self.active = true;
        debug!("physics engine reset");
    }

    /// Drops everything the last step derived from polygon indices.
    fn clear_frame(&mut self) {
        self.world_aabbs.clear();
        self.world_obbs.clear();
        self.bvh.rebuild(&[]);
        self.candidates.clear();
        self.collisions.clear();
        self.stats = StepStats::default();
    }

    /// Enables or disables [`step`](Self::step). Results of the last active
    /// step stay readable while inactive.
    pub fn activate(&mut self, active: bool) {
        self.active = active;
    }

    /// `true` when `step` runs the pipeline.
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Registers a polygon by its local points and returns its index.
    ///
    /// # Errors
    /// Returns [`PhysicsError::DegenerateShape`] for fewer than three points
    /// or non-finite coordinates.
    pub fn add_shape(&mut self, points: &[Vec2]) -> Result<usize, PhysicsError> {
        let bounds = local_bounds(points)?;
        Ok(self.push_local_aabb(bounds))
    }

    /// Registers a polygon by an explicit local box.
    ///
    /// # Errors
    /// Returns [`PhysicsError::DegenerateShape`] for non-finite bounds.
    pub fn add_local_aabb(&mut self, aabb: Aabb) -> Result<usize, PhysicsError> {
        let finite = [aabb.min(), aabb.max()]
            .iter()
            .all(|v| v.x().is_finite() && v.y().is_finite());
        if !finite {
            return Err(PhysicsError::DegenerateShape("non-finite bounds"));
        }
        Ok(self.push_local_aabb(aabb))
    }

    fn push_local_aabb(&mut self, aabb: Aabb) -> usize {
        self.local_aabbs.push(aabb);
        let index = self.local_aabbs.len() - 1;
        trace!(index, ?aabb, "shape added");
        index
    }

    /// Removes shape `index`; the last shape takes its index.
    ///
    /// Everything the previous step derived (world boxes, tree, candidates,
    /// collisions, stats) is cleared since its indices no longer line up.
    ///
    /// # Errors
    /// Returns [`PhysicsError::UnknownShape`] when `index` is out of range.
    pub fn remove_shape(&mut self, index: usize) -> Result<Aabb, PhysicsError> {
        if index >= self.local_aabbs.len() {
            return Err(PhysicsError::UnknownShape(index));
        }
        let removed = self.local_aabbs.swap_remove(index);
        self.clear_frame();
        trace!(index, moved = self.local_aabbs.len(), "shape removed");
        Ok(removed)
    }

    /// Number of registered shapes.
    pub fn shape_count(&self) -> usize {
        self.local_aabbs.len()
    }

    /// Local box of shape `index`.
    pub fn local_aabb(&self, index: usize) -> Option<Aabb> {
        self.local_aabbs.get(index).copied()
    }

    /// Runs one frame of collision detection.
    ///
    /// Does nothing while inactive. Otherwise reads every transform from
    /// `provider`, rebuilds world boxes and the tree, and replaces the
    /// candidate and collision lists.
    ///
    /// # Errors
    /// Returns [`PhysicsError::IndexMismatch`] when `provider` reports a
    /// different polygon count than the registered shapes; the collision list
    /// is left empty.
    #[instrument(level = "debug", skip(self, provider), fields(shapes = self.local_aabbs.len()))]
    pub fn step<P>(&mut self, provider: &P, dt: f32) -> Result<(), PhysicsError>
    where
        P: TransformProvider + ?Sized,
    {
        if !self.active {
            trace!("inactive, step skipped");
            return Ok(());
        }
        self.candidates.clear();
        self.collisions.clear();

        let polygons = provider.polygon_count();
        if polygons != self.local_aabbs.len() {
            let err = PhysicsError::IndexMismatch {
                polygons,
                shapes: self.local_aabbs.len(),
            };
            error!(%err, "transform provider out of sync with registered shapes");
            self.stats = StepStats { dt, ..StepStats::default() };
            return Err(err);
        }

        let started = Instant::now();
        self.update_world_bounds(provider);
        self.bvh.rebuild(&self.world_aabbs);
        let rebuilt = Instant::now();

        self.config
            .broad_phase
            .collect_pairs(&self.bvh, &self.world_aabbs, &mut self.candidates);
        let broad = Instant::now();

        collect_collisions(
            self.config.sat_kernel,
            &self.candidates,
            &self.world_obbs,
            &mut self.collisions,
        );
        let narrow = Instant::now();

        self.stats = StepStats {
            dt,
            polygons,
            candidates: self.candidates.len(),
            collisions: self.collisions.len(),
            tree_depth: self.bvh.depth(),
            rebuild: rebuilt - started,
            broad_phase: broad - rebuilt,
            narrow_phase: narrow - broad,
        };
        debug!(
            polygons,
            candidates = self.stats.candidates,
            collisions = self.stats.collisions,
            depth = self.stats.tree_depth,
            rebuild_us = self.stats.rebuild.as_micros(),
            broad_us = self.stats.broad_phase.as_micros(),
            narrow_us = self.stats.narrow_phase.as_micros(),
            "step complete"
        );
        Ok(())
    }

    fn update_world_bounds<P>(&mut self, provider: &P)
    where
        P: TransformProvider + ?Sized,
    {
        self.world_aabbs.clear();
        self.world_obbs.clear();
        for (i, local) in self.local_aabbs.iter().enumerate() {
            let transform = provider.world_transform(i);
            self.world_aabbs
                .push(local.transformed(transform.position(), &transform.rotation()));
            self.world_obbs.push(Obb::from_local_aabb(local, &transform));
        }
    }

    /// Collisions found by the last active step.
    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }

    /// Visits each collision of the last active step in order.
    pub fn for_each_collision<F>(&self, visitor: F)
    where
        F: FnMut(&Collision),
    {
        self.collisions.iter().for_each(visitor);
    }

    /// Broad-phase candidates of the last active step.
    pub fn candidates(&self) -> &[PolygonPair] {
        &self.candidates
    }

    /// World box of polygon `index` from the last active step.
    pub fn world_aabb(&self, index: usize) -> Option<Aabb> {
        self.world_aabbs.get(index).copied()
    }

    /// World boxes of the last active step.
    pub fn world_aabbs(&self) -> &[Aabb] {
        &self.world_aabbs
    }

    /// Tree built by the last active step.
    pub const fn bvh(&self) -> &Bvh {
        &self.bvh
    }

    /// Timings and counts of the last active step.
    pub const fn stats(&self) -> &StepStats {
        &self.stats
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use collide_geom::Transform;

    fn unit_box() -> Aabb {
        Aabb::from_center_half_extents(Vec2::ZERO, 0.5, 0.5)
    }

    #[test]
    fn remove_shape_swaps_last_into_place() {
        let mut engine = PhysicsEngine::default();
        for i in 0..3 {
            let b = Aabb::from_center_half_extents(Vec2::ZERO, 1.0 + i as f32, 1.0);
            engine.add_local_aabb(b).unwrap();
        }
        engine.remove_shape(0).unwrap();
        assert_eq!(engine.shape_count(), 2);
        assert_eq!(engine.local_aabb(0).map(|b| b.max().x()), Some(3.0));
        assert_eq!(engine.remove_shape(2), Err(PhysicsError::UnknownShape(2)));
    }

    #[test]
    fn reset_reactivates_and_clears() {
        let mut engine = PhysicsEngine::default();
        engine.add_local_aabb(unit_box()).unwrap();
        engine.add_local_aabb(unit_box()).unwrap();
        engine.step(&vec![Transform::IDENTITY; 2], 0.016).unwrap();
        assert_eq!(engine.collisions().len(), 1);
        engine.activate(false);
        engine.reset();
        assert!(engine.is_active());
        assert_eq!(engine.shape_count(), 0);
        assert!(engine.collisions().is_empty());
        assert!(engine.bvh().is_empty());
    }

    #[test]
    fn stats_track_counts() {
        let mut engine = PhysicsEngine::default();
        for _ in 0..3 {
            engine.add_local_aabb(unit_box()).unwrap();
        }
        let transforms: Vec<Transform> = [0.0, 0.5, 5.0]
            .iter()
            .map(|&x| Transform::new(Vec2::new(x, 0.0), collide_geom::Mat2::IDENTITY))
            .collect();
        engine.step(transforms.as_slice(), 0.5).unwrap();
        let stats = engine.stats();
        assert_eq!(stats.polygons, 3);
        assert_eq!(stats.candidates, 1);
        assert_eq!(stats.collisions, 1);
        assert_eq!(stats.tree_depth, 1);
        assert_eq!(stats.dt, 0.5);
    }
}
