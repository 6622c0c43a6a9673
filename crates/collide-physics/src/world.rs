// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Polygons and their dense, index-addressed store.

use collide_geom::{Aabb, Line, Mat2, Transform, Vec2};

use crate::error::PhysicsError;
use crate::provider::TransformProvider;

/// Default density for newly created polygons.
pub const DEFAULT_DENSITY: f32 = 0.1;

/// Checks that `points` describe a usable polygon and returns its local bounds.
///
/// # Errors
/// Returns [`PhysicsError::DegenerateShape`] for fewer than three points or
/// non-finite coordinates.
pub fn local_bounds(points: &[Vec2]) -> Result<Aabb, PhysicsError> {
    if points.len() < 3 {
        return Err(PhysicsError::DegenerateShape("fewer than three points"));
    }
    if points.iter().any(|p| !p.x().is_finite() || !p.y().is_finite()) {
        return Err(PhysicsError::DegenerateShape("non-finite coordinate"));
    }
    Aabb::from_points(points).ok_or(PhysicsError::DegenerateShape("no points"))
}

/// Rigid convex polygon with counter-clockwise local points.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// World position of the local origin.
    pub position: Vec2,
    /// World orientation.
    pub rotation: Mat2,
    /// Linear velocity in world units per second.
    pub velocity: Vec2,
    /// Mass density; zero marks a static or kinematic body.
    pub density: f32,
    points: Vec<Vec2>,
    lines: Vec<Line>,
    bounds: Aabb,
}

impl Polygon {
    /// Creates a polygon at the origin from local `points`.
    ///
    /// # Errors
    /// Returns [`PhysicsError::DegenerateShape`] when `points` is rejected by
    /// [`local_bounds`].
    pub fn new(points: Vec<Vec2>) -> Result<Self, PhysicsError> {
        let bounds = local_bounds(&points)?;
        // Edge `a -> b` is stored anchored at `b` heading back to `a`, so the
        // left normal points outward for counter-clockwise winding.
        let lines = points
            .iter()
            .zip(points.iter().cycle().skip(1))
            .map(|(&a, &b)| Line::new(b, a - b))
            .collect();
        Ok(Self {
            position: Vec2::ZERO,
            rotation: Mat2::IDENTITY,
            velocity: Vec2::ZERO,
            density: DEFAULT_DENSITY,
            points,
            lines,
            bounds,
        })
    }

    /// Local points.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Local edge lines with outward normals.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Tight local bounds.
    pub const fn local_aabb(&self) -> Aabb {
        self.bounds
    }

    /// Current placement.
    pub const fn transform(&self) -> Transform {
        Transform::new(self.position, self.rotation)
    }

    /// Maps a local point to world space.
    pub fn transform_point(&self, point: Vec2) -> Vec2 {
        self.transform().transform_point(point)
    }

    /// Maps a world point to local space.
    pub fn inverse_transform_point(&self, point: Vec2) -> Vec2 {
        self.transform().inverse_transform_point(point)
    }

    /// `true` when `point` (world space) lies inside or on the boundary.
    pub fn contains_point(&self, point: Vec2) -> bool {
        let max_dist = self
            .lines
            .iter()
            .map(|line| line.transform(&self.rotation, self.position).signed_distance(point))
            .fold(f32::NEG_INFINITY, f32::max);
        max_dist <= 0.0
    }

    /// Unsigned area (shoelace formula).
    pub fn area(&self) -> f32 {
        let twice: f32 = self
            .points
            .iter()
            .zip(self.points.iter().cycle().skip(1))
            .map(|(a, b)| a.cross(b))
            .sum();
        twice.abs() * 0.5
    }
}

/// Dense polygon store. Index `i` is polygon `i` for the engine too; adding
/// and removing go through [`crate::Sandbox`] so both stay in lockstep.
#[derive(Debug, Default, Clone)]
pub struct World {
    polygons: Vec<Polygon>,
}

impl World {
    /// Creates an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, polygon: Polygon) -> usize {
        self.polygons.push(polygon);
        self.polygons.len() - 1
    }

    /// Moves the last polygon into `index`.
    pub(crate) fn swap_remove(&mut self, index: usize) -> Option<Polygon> {
        (index < self.polygons.len()).then(|| self.polygons.swap_remove(index))
    }

    pub(crate) fn clear(&mut self) {
        self.polygons.clear();
    }

    /// Number of polygons.
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    /// `true` when the world holds no polygons.
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Polygon `index`, if present.
    pub fn get(&self, index: usize) -> Option<&Polygon> {
        self.polygons.get(index)
    }

    /// Mutable polygon `index`, if present.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Polygon> {
        self.polygons.get_mut(index)
    }

    /// Mutable access to two distinct polygons.
    pub fn pair_mut(&mut self, a: usize, b: usize) -> Option<(&mut Polygon, &mut Polygon)> {
        if a == b || a.max(b) >= self.polygons.len() {
            return None;
        }
        let (lo, hi) = (a.min(b), a.max(b));
        let (front, back) = self.polygons.split_at_mut(hi);
        let (first, second) = (&mut front[lo], &mut back[0]);
        Some(if a < b { (first, second) } else { (second, first) })
    }

    /// Polygons in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Polygon> + '_ {
        self.polygons.iter()
    }

    /// Mutable polygons in index order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Polygon> + '_ {
        self.polygons.iter_mut()
    }
}

impl TransformProvider for World {
    fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    fn world_transform(&self, index: usize) -> Transform {
        self.polygons[index].transform()
    }
}
